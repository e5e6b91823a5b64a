//! Résumé text extraction. Stateless: bytes in, plain text out.
//!
//! PDF parsing is CPU-bound and must run inside `tokio::task::spawn_blocking`.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Works out the document type from the upload's name, declared content type,
/// and leading bytes. Returns `None` for formats we cannot read.
pub fn detect_kind(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Option<DocumentKind> {
    if bytes.starts_with(PDF_MAGIC) {
        return Some(DocumentKind::Pdf);
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match (extension.as_deref(), content_type) {
        (Some("pdf"), _) | (_, Some("application/pdf")) => Some(DocumentKind::Pdf),
        (Some("txt" | "md"), _) => Some(DocumentKind::PlainText),
        (_, Some(ct)) if ct.starts_with("text/") => Some(DocumentKind::PlainText),
        _ => None,
    }
}

/// Extracts plain text from a résumé upload.
pub async fn extract_text(bytes: Bytes, kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
        })
        .await
        .map_err(|_| AppError::UnreadableDocument("PDF parser crashed".to_string()))?
        .map_err(|e| {
            debug!("PDF extraction failed: {e:?}");
            AppError::UnreadableDocument("Could not read text from the PDF".to_string())
        })?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnreadableDocument("Text file is not valid UTF-8".to_string())
        })?,
    };

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        // Scanned PDFs have no text layer.
        return Err(AppError::UnreadableDocument(
            "No text could be extracted; upload a text-based PDF".to_string(),
        ));
    }
    debug!(chars = text.len(), ?kind, "Extracted résumé text");
    Ok(text)
}

/// Collapses runs of blank lines and trailing spaces left behind by PDF extraction.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
