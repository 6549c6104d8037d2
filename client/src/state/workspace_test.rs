use super::*;
use crate::state::ingest::DecodedImage;
use crate::state::notify::{NoticeLog, Severity};
use crate::state::viewport::Layout;

fn batch(names: &[&str]) -> IngestBatch {
    IngestBatch {
        images: names
            .iter()
            .map(|n| DecodedImage { name: (*n).to_owned(), data_url: format!("data:image/png;base64,{n}") })
            .collect(),
        errors: Vec::new(),
    }
}

fn workspace_with(names: &[&str]) -> WorkspaceState {
    let mut ws = WorkspaceState::new("case-001");
    ws.append_batch(ws.ingest_ticket(), batch(names), &NoticeLog::default());
    ws
}

fn names(ws: &WorkspaceState) -> Vec<&str> {
    ws.images.iter().map(|i| i.name.as_str()).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_workspace_is_empty_on_sources() {
    let ws = WorkspaceState::new("case-042");
    assert_eq!(ws.case_id, "case-042");
    assert_eq!(ws.case_name, "Case #042");
    assert!(ws.images.is_empty());
    assert_eq!(ws.selected, None);
    assert_eq!(ws.active_panel, Panel::Sources);
    assert!(!ws.is_analyzing);
    assert!(ws.show_details);
    assert!(!ws.has_report());
}

#[test]
fn title_strips_case_prefix() {
    assert_eq!(title_from_case_id("case-001"), "Case #001");
    assert_eq!(title_from_case_id("evidence-9"), "Case #evidence-9");
    assert_eq!(title_from_case_id(""), "Case #");
}

#[test]
fn image_count_label_pluralizes() {
    assert_eq!(image_count_label(0), "0 images");
    assert_eq!(image_count_label(1), "1 image");
    assert_eq!(image_count_label(2), "2 images");
}

// =============================================================
// append_batch
// =============================================================

#[test]
fn append_batch_adds_all_and_notifies_count() {
    let mut ws = WorkspaceState::new("case-001");
    let log = NoticeLog::default();
    assert_eq!(ws.append_batch(ws.ingest_ticket(), batch(&["a", "b"]), &log), 2);
    assert_eq!(names(&ws), vec!["a", "b"]);
    let notices = log.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Upload Successful");
    assert_eq!(notices[0].description, "Uploaded 2 images.");
}

#[test]
fn append_batch_keeps_existing_images_first() {
    let mut ws = workspace_with(&["a"]);
    ws.append_batch(ws.ingest_ticket(), batch(&["b", "c"]), &NoticeLog::default());
    assert_eq!(names(&ws), vec!["a", "b", "c"]);
}

#[test]
fn append_batch_assigns_unique_ids() {
    let ws = workspace_with(&["a", "b", "c"]);
    let mut ids: Vec<_> = ws.images.iter().map(|i| i.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn append_empty_batch_is_silent() {
    let mut ws = WorkspaceState::new("case-001");
    let log = NoticeLog::default();
    assert_eq!(ws.append_batch(ws.ingest_ticket(), IngestBatch::default(), &log), 0);
    assert!(log.notices().is_empty());
}

// =============================================================
// delete_image / select_image
// =============================================================

#[test]
fn deleting_selected_image_clears_selection() {
    let mut ws = workspace_with(&["a", "b", "c"]);
    let b = ws.images[1].id;
    assert!(ws.select_image(b));
    let log = NoticeLog::default();

    let removed = ws.delete_image(1, &log).expect("index in range");

    assert_eq!(removed.name, "b");
    assert_eq!(ws.selected, None);
    assert_eq!(names(&ws), vec!["a", "c"]);
    assert_eq!(log.titles(), vec!["Image Deleted".to_owned()]);
}

#[test]
fn deleting_other_image_keeps_selection() {
    let mut ws = workspace_with(&["a", "b", "c"]);
    let c = ws.images[2].id;
    ws.select_image(c);

    ws.delete_image(0, &NoticeLog::default());

    assert_eq!(ws.images.len(), 2);
    assert_eq!(ws.selected, Some(c));
    assert_eq!(ws.selected_image().map(|i| i.name.as_str()), Some("c"));
}

#[test]
fn delete_out_of_range_is_noop() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    assert!(ws.delete_image(5, &log).is_none());
    assert_eq!(ws.images.len(), 1);
    assert!(log.notices().is_empty());
}

#[test]
fn select_stale_id_is_ignored() {
    let mut ws = workspace_with(&["a", "b"]);
    let a = ws.images[0].id;
    let b = ws.images[1].id;
    ws.select_image(b);
    ws.delete_image(0, &NoticeLog::default());

    assert!(!ws.select_image(a));
    assert_eq!(ws.selected, Some(b));
}

// =============================================================
// preview
// =============================================================

#[test]
fn preview_shows_first_four_and_overflow() {
    let ws = workspace_with(&["a", "b", "c", "d", "e", "f"]);
    let (shown, more) = ws.preview();
    assert_eq!(shown.len(), PREVIEW_LIMIT);
    assert_eq!(shown[0].name, "a");
    assert_eq!(more, 2);
}

#[test]
fn preview_with_few_images_has_no_overflow() {
    let ws = workspace_with(&["a", "b"]);
    let (shown, more) = ws.preview();
    assert_eq!(shown.len(), 2);
    assert_eq!(more, 0);
}

// =============================================================
// Analysis
// =============================================================

#[test]
fn analyze_empty_warns_and_stays_idle() {
    let mut ws = WorkspaceState::new("case-001");
    let log = NoticeLog::default();
    assert!(ws.begin_analysis(&log).is_none());
    assert!(!ws.is_analyzing);
    assert_eq!(log.titles(), vec!["No Images".to_owned()]);
    assert_eq!(log.count(Severity::Error), 1);
}

#[test]
fn analyze_wide_runs_then_switches_to_studio() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();

    let run = ws.begin_analysis(&log).expect("run should start");
    assert!(ws.is_analyzing);
    assert_eq!(ws.active_panel, Panel::Sources);

    assert!(ws.finish_analysis(run, &Layout::Wide, &log));
    assert!(!ws.is_analyzing);
    assert_eq!(ws.active_panel, Panel::Studio);
    assert_eq!(log.titles(), vec!["Analysis Started".to_owned(), "Analysis Complete".to_owned()]);
}

#[test]
fn analyze_narrow_keeps_panel() {
    let mut ws = workspace_with(&["a"]);
    ws.set_panel(Panel::Chat);
    let log = NoticeLog::default();

    let run = ws.begin_analysis(&log).expect("run should start");
    assert!(ws.finish_analysis(run, &Layout::Narrow, &log));

    assert!(!ws.is_analyzing);
    assert_eq!(ws.active_panel, Panel::Chat);
}

#[test]
fn second_start_while_running_is_ignored() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let run = ws.begin_analysis(&log).expect("run should start");
    assert!(ws.begin_analysis(&log).is_none());
    assert_eq!(log.titles(), vec!["Analysis Started".to_owned()]);
    assert!(ws.finish_analysis(run, &Layout::Wide, &log));
}

#[test]
fn cancelled_run_cannot_finish() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let run = ws.begin_analysis(&log).expect("run should start");

    ws.cancel_analysis();

    assert!(!ws.finish_analysis(run, &Layout::Wide, &log));
    assert!(!ws.is_analyzing);
    assert_eq!(ws.active_panel, Panel::Sources);
    assert_eq!(log.titles(), vec!["Analysis Started".to_owned()]);
}

#[test]
fn stale_run_cannot_finish_newer_run() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let old = ws.begin_analysis(&log).expect("run should start");
    ws.cancel_analysis();
    let new = ws.begin_analysis(&log).expect("run should restart");

    assert!(!ws.finish_analysis(old, &Layout::Wide, &log));
    assert!(ws.is_analyzing);
    assert!(ws.finish_analysis(new, &Layout::Wide, &log));
}

#[test]
fn reset_clears_evidence_and_invalidates_run() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let old = ws.begin_analysis(&log).expect("run should start");

    ws.reset("case-002");
    assert_eq!(ws.case_id, "case-002");
    assert_eq!(ws.case_name, "Case #002");
    assert!(ws.images.is_empty());
    assert!(!ws.is_analyzing);

    ws.append_batch(ws.ingest_ticket(), batch(&["b"]), &log);
    let new = ws.begin_analysis(&log).expect("run should start");
    assert_ne!(old, new);
    assert!(!ws.finish_analysis(old, &Layout::Wide, &log));
    assert!(ws.is_analyzing);
}

#[test]
fn reset_retires_outstanding_ingest_ticket() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let ticket = ws.ingest_ticket();

    ws.reset("case-002");
    let added = ws.append_batch(ticket, batch(&["late-from-case-001"]), &log);

    assert_eq!(added, 0);
    assert!(ws.images.is_empty());
    assert!(log.notices().is_empty());
}

#[test]
fn fresh_ticket_after_reset_appends() {
    let mut ws = workspace_with(&["a"]);
    ws.reset("case-002");
    let ticket = ws.ingest_ticket();
    let log = NoticeLog::default();

    assert_eq!(ws.append_batch(ticket, batch(&["b"]), &log), 1);
    assert_eq!(names(&ws), vec!["b"]);
}

#[test]
fn ticket_survives_ordinary_edits() {
    let mut ws = workspace_with(&["a", "b"]);
    let log = NoticeLog::default();
    let ticket = ws.ingest_ticket();

    ws.delete_image(0, &log);
    ws.set_panel(Panel::Chat);

    assert_eq!(ws.append_batch(ticket, batch(&["c"]), &log), 1);
    assert_eq!(names(&ws), vec!["b", "c"]);
}

#[test]
fn finishing_twice_only_counts_once() {
    let mut ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    let run = ws.begin_analysis(&log).expect("run should start");
    assert!(ws.finish_analysis(run, &Layout::Wide, &log));
    assert!(!ws.finish_analysis(run, &Layout::Wide, &log));
    assert_eq!(log.count(Severity::Success), 1);
}

// =============================================================
// Chrome
// =============================================================

#[test]
fn options_default_enabled_and_toggle() {
    let mut ws = WorkspaceState::new("case-001");
    assert!(AnalysisOption::ALL.iter().all(|o| ws.option_enabled(*o)));
    ws.set_option(AnalysisOption::Weapon, false);
    assert!(!ws.option_enabled(AnalysisOption::Weapon));
    ws.set_option(AnalysisOption::Weapon, false);
    assert_eq!(ws.disabled_options.len(), 1);
    ws.set_option(AnalysisOption::Weapon, true);
    assert!(ws.option_enabled(AnalysisOption::Weapon));
}

#[test]
fn toggle_details_flips() {
    let mut ws = WorkspaceState::new("case-001");
    ws.toggle_details();
    assert!(!ws.show_details);
    ws.toggle_details();
    assert!(ws.show_details);
}

#[test]
fn save_only_notifies() {
    let ws = workspace_with(&["a"]);
    let log = NoticeLog::default();
    ws.save(&log);
    assert_eq!(log.titles(), vec!["Case Saved".to_owned()]);
}
