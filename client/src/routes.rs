//! Route paths and the pages that only exist as placeholders.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const FEATURES: &str = "/features";
pub const ABOUT: &str = "/about";
pub const DASHBOARD: &str = "/dashboard";
pub const SIGN_IN: &str = "/signin";

/// Linked from the site but not built yet. Each renders the coming-soon page.
pub const PLACEHOLDERS: [(&str, &str); 8] = [
    ("pricing", "Pricing"),
    ("security", "Security"),
    ("roadmap", "Roadmap"),
    ("contact", "Contact"),
    ("privacy", "Privacy Policy"),
    ("terms", "Terms of Service"),
    ("forgot-password", "Forgot Password"),
    ("signup", "Sign Up"),
];

pub fn case_path(case_id: &str) -> String {
    format!("/case/{case_id}")
}

/// Page title for a placeholder path such as `/pricing`.
pub fn placeholder_title(path: &str) -> Option<&'static str> {
    let segment = path.trim_start_matches('/').trim_end_matches('/');
    PLACEHOLDERS.iter().find(|(p, _)| *p == segment).map(|(_, title)| *title)
}

/// Whether `path` is served by a real or placeholder route.
pub fn is_known(path: &str) -> bool {
    matches!(path, HOME | FEATURES | ABOUT | DASHBOARD | SIGN_IN)
        || path.strip_prefix("/case/").is_some_and(|id| !id.is_empty() && !id.contains('/'))
        || placeholder_title(path).is_some()
}
