//! Case workspace model: evidence images, panel selection and the mocked
//! analysis cycle.
//!
//! DESIGN
//! ======
//! Two orthogonal pieces of state: `active_panel` (which of the three panels
//! is showing) and `is_analyzing`. Analysis is content-independent; it only
//! flips the flag, waits, and reveals the fixed report.
//!
//! Each analysis start hands out an `AnalysisRun` token. Completion is only
//! accepted for the latest token while the flag is still set, so a timer that
//! fires after cancellation or a restart cannot flip state.
//!
//! Uploads work the same way: an `IngestTicket` taken when reading starts is
//! checked on append, and `reset` retires every outstanding ticket.
//!
//! Images are selected by id rather than by position so deletes never move
//! the selection onto a neighbour.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use super::ingest::IngestBatch;
use super::notify::{Notice, Notifier};
use super::viewport::ViewportObserver;

/// Number of images shown in the analysis preview strip.
pub const PREVIEW_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Sources,
    Chat,
    Studio,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Sources, Panel::Chat, Panel::Studio];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Sources => "Upload Evidence",
            Panel::Chat => "Analyze",
            Panel::Studio => "Report",
        }
    }
}

/// Session-unique image identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvidenceImage {
    pub id: ImageId,
    pub name: String,
    pub data_url: String,
}

/// Token for one analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisRun(u64);

/// Token for one upload batch. Only valid for the workspace epoch it was
/// taken in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IngestTicket(u64);

/// Toggles shown on the analyze panel. They do not change the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisOption {
    BloodPattern,
    Fingerprint,
    ObjectRecognition,
    Footprint,
    Weapon,
}

impl AnalysisOption {
    pub const ALL: [AnalysisOption; 5] = [
        AnalysisOption::BloodPattern,
        AnalysisOption::Fingerprint,
        AnalysisOption::ObjectRecognition,
        AnalysisOption::Footprint,
        AnalysisOption::Weapon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisOption::BloodPattern => "Blood Pattern Analysis",
            AnalysisOption::Fingerprint => "Fingerprint Detection",
            AnalysisOption::ObjectRecognition => "Object Recognition",
            AnalysisOption::Footprint => "Footprint Analysis",
            AnalysisOption::Weapon => "Weapon Identification",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            AnalysisOption::BloodPattern => "option-blood",
            AnalysisOption::Fingerprint => "option-fingerprints",
            AnalysisOption::ObjectRecognition => "option-objects",
            AnalysisOption::Footprint => "option-footprints",
            AnalysisOption::Weapon => "option-weapon",
        }
    }
}

/// Display title for a case id: `case-007` becomes `Case #007`.
pub fn title_from_case_id(case_id: &str) -> String {
    format!("Case #{}", case_id.replacen("case-", "", 1))
}

/// `"1 image"` / `"3 images"`.
pub fn image_count_label(count: usize) -> String {
    if count == 1 { "1 image".to_owned() } else { format!("{count} images") }
}

/// Per-case workspace state. Rebuilt empty whenever a case page mounts.
#[derive(Clone, Debug)]
pub struct WorkspaceState {
    pub case_id: String,
    pub case_name: String,
    pub description: String,
    pub show_details: bool,
    pub images: Vec<EvidenceImage>,
    pub selected: Option<ImageId>,
    pub active_panel: Panel,
    pub is_analyzing: bool,
    pub disabled_options: Vec<AnalysisOption>,
    next_image_id: u64,
    analysis_seq: u64,
    ingest_epoch: u64,
}

impl WorkspaceState {
    pub fn new(case_id: &str) -> Self {
        Self {
            case_id: case_id.to_owned(),
            case_name: title_from_case_id(case_id),
            description: String::new(),
            show_details: true,
            images: Vec::new(),
            selected: None,
            active_panel: Panel::default(),
            is_analyzing: false,
            disabled_options: Vec::new(),
            next_image_id: 0,
            analysis_seq: 0,
            ingest_epoch: 0,
        }
    }

    /// Start over for another case. In-flight analysis runs and uploads are
    /// invalidated.
    pub fn reset(&mut self, case_id: &str) {
        let analysis_seq = self.analysis_seq + 1;
        let ingest_epoch = self.ingest_epoch + 1;
        *self = Self::new(case_id);
        self.analysis_seq = analysis_seq;
        self.ingest_epoch = ingest_epoch;
    }

    // ---------------------------------------------------------
    // Evidence
    // ---------------------------------------------------------

    /// Ticket to hold while a batch is being read.
    pub fn ingest_ticket(&self) -> IngestTicket {
        IngestTicket(self.ingest_epoch)
    }

    /// Append a decoded batch in one step. Returns the number of images added.
    /// A batch with no images, or one read under a retired ticket, changes
    /// nothing and emits nothing.
    pub fn append_batch(&mut self, ticket: IngestTicket, batch: IngestBatch, notifier: &dyn Notifier) -> usize {
        if ticket.0 != self.ingest_epoch {
            return 0;
        }
        let added = batch.images.len();
        if added == 0 {
            return 0;
        }
        for image in batch.images {
            self.next_image_id += 1;
            self.images.push(EvidenceImage {
                id: ImageId(self.next_image_id),
                name: image.name,
                data_url: image.data_url,
            });
        }
        notifier.notify(Notice::success("Upload Successful", format!("Uploaded {}.", image_count_label(added))));
        added
    }

    /// Remove the image at `index`. Clears the selection when it pointed at
    /// the removed image. Out-of-range indexes are ignored.
    pub fn delete_image(&mut self, index: usize, notifier: &dyn Notifier) -> Option<EvidenceImage> {
        if index >= self.images.len() {
            return None;
        }
        let removed = self.images.remove(index);
        if self.selected == Some(removed.id) {
            self.selected = None;
        }
        notifier.notify(Notice::info("Image Deleted", "The image has been removed from your case."));
        Some(removed)
    }

    /// Select an image. Ids that are no longer in the workspace are ignored.
    pub fn select_image(&mut self, id: ImageId) -> bool {
        if self.images.iter().any(|i| i.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn selected_image(&self) -> Option<&EvidenceImage> {
        let id = self.selected?;
        self.images.iter().find(|i| i.id == id)
    }

    /// The first [`PREVIEW_LIMIT`] images and how many more are hidden.
    pub fn preview(&self) -> (&[EvidenceImage], usize) {
        let shown = self.images.len().min(PREVIEW_LIMIT);
        (&self.images[..shown], self.images.len() - shown)
    }

    /// The report is available as soon as any evidence exists.
    pub fn has_report(&self) -> bool {
        !self.images.is_empty()
    }

    // ---------------------------------------------------------
    // Analysis
    // ---------------------------------------------------------

    /// Start a run. With no images this only warns. A second start while a
    /// run is in flight is ignored.
    pub fn begin_analysis(&mut self, notifier: &dyn Notifier) -> Option<AnalysisRun> {
        if self.images.is_empty() {
            notifier.notify(Notice::error("No Images", "Please upload at least one image to analyze."));
            return None;
        }
        if self.is_analyzing {
            return None;
        }
        self.analysis_seq += 1;
        self.is_analyzing = true;
        notifier.notify(Notice::info("Analysis Started", "Your images are being analyzed. This may take a moment."));
        Some(AnalysisRun(self.analysis_seq))
    }

    /// Finish `run` if it is still the live one. Switches to the report panel
    /// on wide layouts. Returns `false` for stale runs.
    pub fn finish_analysis(&mut self, run: AnalysisRun, viewport: &dyn ViewportObserver, notifier: &dyn Notifier) -> bool {
        if !self.is_analyzing || run.0 != self.analysis_seq {
            return false;
        }
        self.is_analyzing = false;
        notifier.notify(Notice::success("Analysis Complete", "Your images have been analyzed. View the report for details."));
        if !viewport.layout().is_narrow() {
            self.active_panel = Panel::Studio;
        }
        true
    }

    /// Abandon any in-flight run. Its completion will be ignored.
    pub fn cancel_analysis(&mut self) {
        self.analysis_seq += 1;
        self.is_analyzing = false;
    }

    // ---------------------------------------------------------
    // Chrome
    // ---------------------------------------------------------

    pub fn set_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    pub fn option_enabled(&self, option: AnalysisOption) -> bool {
        !self.disabled_options.contains(&option)
    }

    pub fn set_option(&mut self, option: AnalysisOption, enabled: bool) {
        self.disabled_options.retain(|o| *o != option);
        if !enabled {
            self.disabled_options.push(option);
        }
    }

    /// Nothing is persisted; saving only confirms to the user.
    pub fn save(&self, notifier: &dyn Notifier) {
        notifier.notify(Notice::success("Case Saved", "Your case has been saved successfully."));
    }
}
