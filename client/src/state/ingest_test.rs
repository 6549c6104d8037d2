use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{join, ready};

use super::*;
use crate::state::notify::{NoticeLog, Severity};
use crate::state::workspace::WorkspaceState;

struct TestFile {
    name: &'static str,
    content_type: &'static str,
    read: RefCell<Option<LocalBoxFuture<'static, Result<Vec<u8>, String>>>>,
}

impl TestFile {
    fn ready(name: &'static str, content_type: &'static str, bytes: &[u8]) -> Self {
        let bytes = bytes.to_vec();
        Self::with_read(name, content_type, ready(Ok(bytes)).boxed_local())
    }

    fn failing(name: &'static str, reason: &str) -> Self {
        let reason = reason.to_owned();
        Self::with_read(name, "image/jpeg", ready(Err(reason)).boxed_local())
    }

    fn gated(name: &'static str, rx: oneshot::Receiver<Vec<u8>>) -> Self {
        let read = rx.map(|r| r.map_err(|_| "sender dropped".to_owned())).boxed_local();
        Self::with_read(name, "image/png", read)
    }

    fn with_read(
        name: &'static str,
        content_type: &'static str,
        read: LocalBoxFuture<'static, Result<Vec<u8>, String>>,
    ) -> Self {
        Self { name, content_type, read: RefCell::new(Some(read)) }
    }
}

impl EvidenceFile for TestFile {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn content_type(&self) -> String {
        self.content_type.to_owned()
    }

    fn read_bytes(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, String>> {
        self.read
            .borrow_mut()
            .take()
            .unwrap_or_else(|| ready(Err("read twice".to_owned())).boxed_local())
    }
}

/// Returns `Pending` once, then completes.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

fn names(batch: &IngestBatch) -> Vec<&str> {
    batch.images.iter().map(|i| i.name.as_str()).collect()
}

// =============================================================
// Content type screening and encoding
// =============================================================

#[test]
fn image_content_types_are_accepted() {
    assert!(is_image_content_type("image/png"));
    assert!(is_image_content_type("image/svg+xml"));
}

#[test]
fn non_image_content_types_are_rejected() {
    assert!(!is_image_content_type("text/plain"));
    assert!(!is_image_content_type(""));
    assert!(!is_image_content_type("application/image"));
}

#[test]
fn encode_data_url_uses_standard_base64() {
    assert_eq!(encode_data_url("image/png", &[1, 2, 3]), "data:image/png;base64,AQID");
    assert_eq!(encode_data_url("image/gif", b""), "data:image/gif;base64,");
}

// =============================================================
// decode_batch
// =============================================================

#[test]
fn mixed_batch_keeps_image_and_reports_one_error() {
    let log = NoticeLog::default();
    let files = vec![TestFile::ready("a.png", "image/png", b"png"), TestFile::ready("b.txt", "text/plain", b"txt")];

    let batch = block_on(decode_batch(files, &log));

    assert_eq!(names(&batch), vec!["a.png"]);
    assert_eq!(batch.images[0].data_url, encode_data_url("image/png", b"png"));
    assert_eq!(batch.errors, vec![IngestError::NotAnImage { name: "b.txt".to_owned() }]);
    assert_eq!(log.count(Severity::Error), 1);
    assert_eq!(log.titles(), vec!["Unsupported File".to_owned()]);
}

#[test]
fn read_failure_skips_only_that_file() {
    let log = NoticeLog::default();
    let files = vec![TestFile::failing("broken.jpg", "permission denied"), TestFile::ready("ok.jpg", "image/jpeg", b"j")];

    let batch = block_on(decode_batch(files, &log));

    assert_eq!(names(&batch), vec!["ok.jpg"]);
    assert_eq!(
        batch.errors,
        vec![IngestError::Read { name: "broken.jpg".to_owned(), reason: "permission denied".to_owned() }]
    );
    assert_eq!(log.titles(), vec!["Upload Failed".to_owned()]);
}

#[test]
fn empty_batch_is_empty() {
    let log = NoticeLog::default();
    let batch = block_on(decode_batch(Vec::<TestFile>::new(), &log));
    assert_eq!(batch, IngestBatch::default());
    assert!(log.notices().is_empty());
}

#[test]
fn all_rejected_batch_has_no_images() {
    let log = NoticeLog::default();
    let files = vec![TestFile::ready("a.pdf", "application/pdf", b""), TestFile::ready("b", "", b"")];
    let batch = block_on(decode_batch(files, &log));
    assert!(batch.images.is_empty());
    assert_eq!(batch.errors.len(), 2);
    assert_eq!(log.count(Severity::Error), 2);
}

#[test]
fn images_arrive_in_completion_order() {
    let (tx_a, rx_a) = oneshot::channel();
    let (tx_b, rx_b) = oneshot::channel();
    let files = vec![TestFile::gated("a.png", rx_a), TestFile::gated("b.png", rx_b)];
    let log = NoticeLog::default();

    let finish_out_of_order = async move {
        let _ = tx_b.send(b"B".to_vec());
        YieldOnce(false).await;
        let _ = tx_a.send(b"A".to_vec());
    };
    let (batch, ()) = block_on(join(decode_batch(files, &log), finish_out_of_order));

    assert_eq!(names(&batch), vec!["b.png", "a.png"]);
    assert!(batch.errors.is_empty());
}

#[test]
fn mixed_batch_grows_existing_workspace_by_one() {
    let mut ws = WorkspaceState::new("case-001");
    let seeded = IngestBatch {
        images: vec![DecodedImage { name: "scene.png".to_owned(), data_url: encode_data_url("image/png", b"s") }],
        errors: Vec::new(),
    };
    ws.append_batch(ws.ingest_ticket(), seeded, &NoticeLog::default());
    let prior = ws.images.len();

    let log = NoticeLog::default();
    let ticket = ws.ingest_ticket();
    let files = vec![TestFile::ready("a.png", "image/png", b"png"), TestFile::ready("b.txt", "text/plain", b"txt")];
    let batch = block_on(decode_batch(files, &log));
    ws.append_batch(ticket, batch, &log);

    assert_eq!(ws.images.len(), prior + 1);
    assert_eq!(ws.images.last().map(|i| i.name.as_str()), Some("a.png"));
    assert_eq!(log.count(Severity::Error), 1);
    assert_eq!(log.count(Severity::Success), 1);
}

// =============================================================
// IngestError
// =============================================================

#[test]
fn not_an_image_notice_names_file() {
    let notice = IngestError::NotAnImage { name: "notes.txt".to_owned() }.to_notice();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.description, "notes.txt is not an image file.");
}
