//! Scoped staging of uploaded documents.
//!
//! Each upload is written to its own uniquely named temp file. The file is removed
//! when the `StagedUpload` is dropped, so every exit path of a request cleans up.

use std::path::Path;

use bytes::Bytes;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to stage uploaded file: {0}")]
    Io(#[from] std::io::Error),
}

pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Writes `contents` to a fresh temp file, keeping the uploaded extension so the
    /// content loader can pick an extractor.
    pub async fn stage(file_name: Option<&str>, contents: Bytes) -> Result<Self, UploadError> {
        let suffix = file_name
            .and_then(safe_extension)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let file = tempfile::Builder::new()
            .prefix("application-")
            .suffix(&suffix)
            .tempfile()?;
        tokio::fs::write(file.path(), &contents).await?;

        debug!(
            "Staged {} byte upload at {}",
            contents.len(),
            file.path().display()
        );
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Removes the temp file now, logging instead of failing if removal does not work.
    pub fn cleanup(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to remove staged upload {}: {e}", path.display());
        }
    }
}

/// Lower-cased extension of an uploaded file name, if it is a plain short token.
fn safe_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    let valid = !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}
