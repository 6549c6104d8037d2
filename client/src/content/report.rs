//! Fixed forensic report shown once a case has evidence.
//!
//! The report never depends on image contents.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

pub const REPORT_TITLE: &str = "Forensic Analysis Report";
pub const REPORT_SUBTITLE: &str = "AI-generated report based on the evidence provided.";

pub const EXECUTIVE_SUMMARY: &str = "The analysis of the provided crime scene images reveals several key findings. \
The evidence suggests a forced entry through the rear entrance, with multiple fingerprints detected on the door handle \
and window frame. Blood pattern analysis indicates a struggle occurred in the main area, with directional spatter \
consistent with a medium-velocity impact. Several objects of interest have been identified and cataloged for further \
investigation.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finding {
    pub heading: &'static str,
    pub headline: &'static str,
    pub visual_caption: &'static str,
    pub details: [&'static str; 3],
}

pub const FINDINGS: [Finding; 4] = [
    Finding {
        heading: "Fingerprint Analysis",
        headline: "4 distinct fingerprint patterns identified",
        visual_caption: "Fingerprint visualization image",
        details: [
            "2 prints match database records",
            "2 unidentified prints preserved for comparison",
            "Highest quality print found on door handle",
        ],
    },
    Finding {
        heading: "Blood Pattern Analysis",
        headline: "Medium-velocity impact spatter identified",
        visual_caption: "Blood pattern visualization",
        details: [
            "Directionality suggests origin point near window",
            "Cast-off pattern indicates swinging motion",
            "Transfer stains found on doorknob",
        ],
    },
    Finding {
        heading: "Object Recognition",
        headline: "12 significant objects identified",
        visual_caption: "Object recognition results",
        details: [
            "Potential weapon identified (kitchen knife)",
            "Displaced furniture consistent with struggle",
            "Foreign object (unidentified tool) near entry point",
        ],
    },
    Finding {
        heading: "Footprint Analysis",
        headline: "3 distinct footprint patterns identified",
        visual_caption: "Footprint visualization",
        details: [
            "Size 11 men's athletic shoe (primary suspect)",
            "Size 8 women's shoe (likely victim)",
            "Partial print of work boot near rear entrance",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub glyph: &'static str,
    pub action: &'static str,
    pub rationale: &'static str,
}

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        glyph: "🖐",
        action: "Submit unidentified fingerprints for extended database search",
        rationale: "High-quality prints may yield matches in expanded criminal databases.",
    },
    Recommendation {
        glyph: "🔬",
        action: "Collect DNA samples from blood evidence",
        rationale: "Blood patterns indicate multiple sources; DNA analysis recommended to identify individuals.",
    },
    Recommendation {
        glyph: "📷",
        action: "Enhanced imaging of partial footprint",
        rationale: "The partial work boot print requires advanced enhancement techniques for better identification.",
    },
];
