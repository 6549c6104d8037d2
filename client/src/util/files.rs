//! Browser `File` adapter for evidence ingest.

#[cfg(feature = "hydrate")]
use futures::future::LocalBoxFuture;

#[cfg(feature = "hydrate")]
use crate::state::ingest::EvidenceFile;

/// A `web_sys::File` picked or dropped by the user.
#[cfg(feature = "hydrate")]
pub struct BrowserFile(web_sys::File);

#[cfg(feature = "hydrate")]
impl EvidenceFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn content_type(&self) -> String {
        self.0.type_()
    }

    fn read_bytes(&self) -> LocalBoxFuture<'static, Result<Vec<u8>, String>> {
        let promise = self.0.array_buffer();
        Box::pin(async move {
            let buffer = wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(|e| e.as_string().unwrap_or_else(|| "file read was rejected".to_owned()))?;
            Ok(js_sys::Uint8Array::new(&buffer).to_vec())
        })
    }
}

/// Collect every file in a `FileList` (input change or drop payload).
#[cfg(feature = "hydrate")]
pub fn from_file_list(list: Option<web_sys::FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).map(BrowserFile).collect()
}
