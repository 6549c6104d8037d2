use super::*;
use crate::routes::is_known;

#[test]
fn every_nav_and_footer_link_is_routed() {
    let footer = FOOTER_COLUMNS.iter().flat_map(|c| c.links.iter());
    for link in NAV_LINKS.iter().chain(footer) {
        assert!(is_known(link.href), "{} -> {} is not routed", link.label, link.href);
    }
}

#[test]
fn six_features_three_testimonials() {
    assert_eq!(FEATURES.len(), 6);
    assert_eq!(TESTIMONIALS.len(), 3);
    assert!(TESTIMONIALS.iter().all(|t| t.initials.len() == 2));
}

#[test]
fn wrapped_copy_has_single_spaces() {
    let copy = [HERO_BODY, FEATURES_INTRO].into_iter().chain(FEATURES.iter().map(|f| f.description));
    for text in copy {
        assert!(!text.contains("  "), "double space in {text:?}");
        assert!(!text.contains('\n'));
    }
}

#[test]
fn copyright_line_includes_year() {
    assert_eq!(copyright_line(2025), "© 2025 CrimeSleuth AI. All rights reserved.");
}
