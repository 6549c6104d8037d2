//! Evidence file decoding.
//!
//! DESIGN
//! ======
//! A batch of picked or dropped files is screened by declared content type,
//! then every accepted file is read concurrently. Results are collected in
//! completion order and handed back as one batch, so the workspace appends
//! either the whole batch or nothing from it.
//!
//! The file source is a trait so the browser `File` wrapper and in-memory
//! test files go through the same path.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures::StreamExt;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;

use super::notify::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("{name} is not an image file.")]
    NotAnImage { name: String },
    #[error("{name} could not be read: {reason}")]
    Read { name: String, reason: String },
}

impl IngestError {
    pub fn to_notice(&self) -> Notice {
        match self {
            IngestError::NotAnImage { .. } => Notice::error("Unsupported File", self.to_string()),
            IngestError::Read { .. } => Notice::error("Upload Failed", self.to_string()),
        }
    }
}

/// A file offered for ingest.
pub trait EvidenceFile {
    fn name(&self) -> String;
    /// Declared MIME type, e.g. `image/png`. May be empty.
    fn content_type(&self) -> String;
    /// Read the full contents. Failures carry a human-readable reason.
    fn read_bytes(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, String>>;
}

/// A successfully read image, ready to be placed in a workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub name: String,
    pub data_url: String,
}

/// Outcome of one ingest batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestBatch {
    /// Decoded images in completion order.
    pub images: Vec<DecodedImage>,
    pub errors: Vec<IngestError>,
}

pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Encode raw bytes as a `data:` URL.
pub fn encode_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", BASE64.encode(bytes))
}

/// Screen and decode a batch of files.
///
/// Non-image files are rejected up front. Accepted files are read
/// concurrently; a read failure skips that file and the rest of the batch
/// proceeds. Every rejection and failure is reported to `notifier` as it
/// happens.
pub async fn decode_batch<F: EvidenceFile>(files: Vec<F>, notifier: &dyn Notifier) -> IngestBatch {
    let mut batch = IngestBatch::default();
    let mut pending = FuturesUnordered::new();

    for file in files {
        let name = file.name();
        let content_type = file.content_type();
        if !is_image_content_type(&content_type) {
            let err = IngestError::NotAnImage { name };
            notifier.notify(err.to_notice());
            batch.errors.push(err);
            continue;
        }
        let read = file.read_bytes();
        pending.push(async move { (name, content_type, read.await) });
    }

    while let Some((name, content_type, result)) = pending.next().await {
        match result {
            Ok(bytes) => batch.images.push(DecodedImage { data_url: encode_data_url(&content_type, &bytes), name }),
            Err(reason) => {
                let err = IngestError::Read { name, reason };
                notifier.notify(err.to_notice());
                batch.errors.push(err);
            }
        }
    }

    batch
}
