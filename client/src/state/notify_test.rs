use super::*;

// =============================================================
// Notice constructors
// =============================================================

#[test]
fn constructors_set_severity() {
    assert_eq!(Notice::info("a", "b").severity, Severity::Info);
    assert_eq!(Notice::success("a", "b").severity, Severity::Success);
    assert_eq!(Notice::error("a", "b").severity, Severity::Error);
}

#[test]
fn constructors_keep_title_and_description() {
    let notice = Notice::error("No Images", "Please upload at least one image to analyze.");
    assert_eq!(notice.title, "No Images");
    assert_eq!(notice.description, "Please upload at least one image to analyze.");
}

// =============================================================
// NoticeLog
// =============================================================

#[test]
fn notice_log_records_in_order() {
    let log = NoticeLog::default();
    log.notify(Notice::info("first", ""));
    log.notify(Notice::error("second", ""));
    assert_eq!(log.titles(), vec!["first".to_owned(), "second".to_owned()]);
    assert_eq!(log.count(Severity::Error), 1);
    assert_eq!(log.count(Severity::Success), 0);
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_puts_newest_first_with_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::info("a", ""));
    let b = state.push(Notice::info("b", ""));
    assert!(b > a);
    assert_eq!(state.toasts[0].notice.title, "b");
    assert_eq!(state.toasts[1].notice.title, "a");
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(TOAST_LIMIT + 2) {
        state.push(Notice::info(format!("t{i}"), ""));
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert_eq!(state.toasts[0].notice.title, format!("t{}", TOAST_LIMIT + 1));
    assert!(state.toasts.iter().all(|t| t.notice.title != "t0"));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(Notice::info("a", ""));
    let b = state.push(Notice::info("b", ""));
    assert!(state.dismiss(a));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(Notice::info("a", ""));
    assert!(!state.dismiss(999));
    assert_eq!(state.toasts.len(), 1);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn severity_serializes_as_variant_name() {
    assert_eq!(serde_json::to_string(&Severity::Success).expect("serialize"), "\"Success\"");
    let back: Severity = serde_json::from_str("\"Error\"").expect("deserialize");
    assert_eq!(back, Severity::Error);
}

#[test]
fn notice_round_trips_through_json() {
    let notice = Notice::error("No Images", "Please upload at least one image to analyze.");
    let json = serde_json::to_string(&notice).expect("serialize");
    let back: Notice = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, notice);
}
