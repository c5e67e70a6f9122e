//! Content loader: resolves the text that will be classified.
//!
//! A readable document at `source_path` replaces `application_text`. Any failure to
//! read it is logged and swallowed: the workflow continues with the text it was given.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

use crate::screening::models::{ApplicationState, StateUpdate};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract text from '{path}': {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("unsupported document format: '{0}'")]
    UnsupportedFormat(String),
}

/// Load step. Returns an update carrying the extracted text, or an empty update when
/// there is no document or it could not be read.
pub async fn load_application(state: &ApplicationState) -> StateUpdate {
    let Some(path) = state.source_path.as_deref() else {
        return StateUpdate::default();
    };

    match extract_document_text(path).await {
        Ok(text) => {
            info!(
                "Loaded {} characters from {}",
                text.chars().count(),
                path.display()
            );
            StateUpdate::text(text)
        }
        Err(e) => {
            warn!("Error loading document, keeping supplied text: {e}");
            StateUpdate::default()
        }
    }
}

/// Extracts all text from a document, dispatching on its extension.
/// PDF pages are concatenated in order; `.txt` and `.md` are read as UTF-8.
pub async fn extract_document_text(path: &Path) -> Result<String, LoadError> {
    if !fs::try_exists(path).await? {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(path).await,
        "txt" | "md" | "markdown" => Ok(fs::read_to_string(path).await?),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

async fn extract_pdf(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).await?;
    let owned_path = path.to_path_buf();

    // pdf-extract is CPU-bound and may panic on malformed input; keep it off the runtime.
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|result| result);

    extracted.map_err(|reason| LoadError::Extraction {
        path: owned_path,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_document(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("loader-test-")
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_no_source_path_leaves_text_untouched() {
        let state = ApplicationState::seed("pasted resume", None, "Python Developer");
        assert_eq!(load_application(&state).await, StateUpdate::default());
    }

    #[tokio::test]
    async fn test_text_document_overrides_supplied_text() {
        let doc = temp_document(".txt", b"10 years of Python and Django");
        let state = ApplicationState::seed(
            "stale text",
            Some(doc.path().to_path_buf()),
            "Python Developer",
        );

        let update = load_application(&state).await;
        assert_eq!(
            update.application_text.as_deref(),
            Some("10 years of Python and Django")
        );
    }

    #[tokio::test]
    async fn test_missing_document_falls_back() {
        let state = ApplicationState::seed(
            "fallback text",
            Some(PathBuf::from("/definitely/not/here/resume.pdf")),
            "Python Developer",
        );
        assert_eq!(load_application(&state).await, StateUpdate::default());
    }

    #[tokio::test]
    async fn test_missing_document_reports_not_found() {
        let result = extract_document_text(Path::new("/definitely/not/here/resume.pdf")).await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let doc = temp_document(".docx", b"PK\x03\x04");
        let result = extract_document_text(doc.path()).await;
        match result {
            Err(LoadError::UnsupportedFormat(ext)) => assert_eq!(ext, "docx"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_pdf_falls_back() {
        let doc = temp_document(".pdf", b"this is not a pdf");
        let state = ApplicationState::seed(
            "fallback text",
            Some(doc.path().to_path_buf()),
            "Python Developer",
        );
        assert!(extract_document_text(doc.path()).await.is_err());
        assert_eq!(load_application(&state).await, StateUpdate::default());
    }

    #[tokio::test]
    async fn test_extension_match_is_case_insensitive() {
        let doc = temp_document(".TXT", b"upper-case extension");
        let text = extract_document_text(doc.path()).await.unwrap();
        assert_eq!(text, "upper-case extension");
    }
}
