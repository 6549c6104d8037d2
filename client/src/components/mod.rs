pub mod analyze_panel;
pub mod case_card;
pub mod case_sidebar;
pub mod feature_grid;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod report_panel;
pub mod site_layout;
pub mod sources_panel;
pub mod testimonials;
pub mod toaster;
