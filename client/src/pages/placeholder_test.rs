use super::*;

#[test]
fn heading_names_known_placeholder() {
    assert_eq!(coming_soon_heading("/pricing"), "Pricing is coming soon");
    assert_eq!(coming_soon_heading("/privacy"), "Privacy Policy is coming soon");
}

#[test]
fn heading_falls_back_for_unknown_path() {
    assert_eq!(coming_soon_heading("/elsewhere"), "Coming Soon");
}
