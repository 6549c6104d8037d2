//! Marketing copy: navigation, hero, features, testimonials and footer.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

pub const PRODUCT_NAME: &str = "CrimeSleuth AI";

pub const HERO_TITLE: &str = "AI-Powered Forensic Analysis";
pub const HERO_BODY: &str = "CrimeSleuth AI harnesses cutting-edge artificial intelligence to transform crime scene \
investigation. Upload images, analyze evidence, and generate comprehensive reports with unprecedented accuracy and \
speed.";

pub const FEATURES_EYEBROW: &str = "Advanced Capabilities";
pub const FEATURES_HEADING: &str = "Transform your investigative process";
pub const FEATURES_INTRO: &str = "CrimeSleuth AI combines the expertise of forensic science with cutting-edge \
artificial intelligence to revolutionize how crime scenes are analyzed.";

pub const TESTIMONIALS_EYEBROW: &str = "Testimonials";
pub const TESTIMONIALS_HEADING: &str = "Trusted by forensic professionals worldwide";

pub const FOOTER_TAGLINE: &str =
    "Empowering forensic professionals with cutting-edge AI technology to solve cases faster and with greater accuracy.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Plain text links in the header. The dashboard and sign-in buttons are
/// rendered separately.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Features", href: "/features" },
    NavLink { label: "About", href: "/about" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    /// Short glyph shown in place of an icon.
    pub glyph: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        name: "Advanced Image Analysis",
        description: "Our AI examines crime scene photographs to identify key evidence, anomalies, and patterns that \
may not be visible to the human eye.",
        glyph: "📷",
    },
    Feature {
        name: "Forensic Pattern Recognition",
        description: "Automatically detect blood patterns, footprints, tool marks, and other critical forensic \
evidence using state-of-the-art computer vision.",
        glyph: "🔬",
    },
    Feature {
        name: "Comprehensive Reporting",
        description: "Generate detailed reports with evidence cataloging, analysis findings, and potential leads to \
streamline your investigation workflow.",
        glyph: "📄",
    },
    Feature {
        name: "Evidence Search & Correlation",
        description: "Search across cases to find similar evidence patterns or correlations that may connect \
seemingly unrelated crimes.",
        glyph: "🔎",
    },
    Feature {
        name: "AI-Driven Insights",
        description: "Leverage our neural networks to suggest investigative directions and highlight elements that \
warrant closer examination.",
        glyph: "🧠",
    },
    Feature {
        name: "Rapid Processing",
        description: "Save countless hours with our high-speed processing that delivers results in minutes rather \
than days or weeks.",
        glyph: "⏱",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub body: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        body: "CrimeSleuth AI has revolutionized our department's investigation process. We solved a cold case within \
weeks of implementing the platform.",
        name: "Det. Sarah Johnson",
        role: "Lead Investigator, Boston PD",
        initials: "SJ",
    },
    Testimonial {
        body: "The pattern recognition capabilities identified crucial evidence that we had overlooked during our \
initial walkthrough. Truly game-changing technology.",
        name: "Dr. Michael Chen",
        role: "Forensic Scientist, FBI",
        initials: "MC",
    },
    Testimonial {
        body: "Report generation alone has saved our team dozens of hours per case. The AI insights have proven \
invaluable for developing new investigative leads.",
        name: "Lt. Carlos Rodriguez",
        role: "Special Crimes Unit, Miami",
        initials: "CR",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: [NavLink; 4],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Platform",
        links: [
            NavLink { label: "Features", href: "/features" },
            NavLink { label: "Pricing", href: "/pricing" },
            NavLink { label: "Security", href: "/security" },
            NavLink { label: "Roadmap", href: "/roadmap" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: [
            NavLink { label: "About Us", href: "/about" },
            NavLink { label: "Contact", href: "/contact" },
            NavLink { label: "Privacy Policy", href: "/privacy" },
            NavLink { label: "Terms of Service", href: "/terms" },
        ],
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {PRODUCT_NAME}. All rights reserved.")
}
