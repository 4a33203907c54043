//! Plain-text extraction for uploaded resume / job-description files.

use tracing::debug;

use crate::errors::AppError;

/// Upload formats we can reduce to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Pdf,
    PlainText,
}

/// Picks a format from the declared content type, then the file extension.
pub fn detect_format(file_name: Option<&str>, content_type: Option<&str>) -> Option<UploadFormat> {
    match content_type.map(|c| c.split(';').next().unwrap_or(c).trim()) {
        Some("application/pdf") => return Some(UploadFormat::Pdf),
        Some("text/plain") | Some("text/markdown") => return Some(UploadFormat::PlainText),
        _ => {}
    }

    let extension = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some(UploadFormat::Pdf),
        "txt" | "md" => Some(UploadFormat::PlainText),
        _ => None,
    }
}

/// Extracts the text content of an uploaded file.
pub fn extract_text(format: UploadFormat, bytes: &[u8]) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let text = match format {
        UploadFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?,
        UploadFormat::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::Validation("Text upload is not valid UTF-8".to_string()))?,
    };

    debug!(?format, chars = text.chars().count(), "Extracted upload text");

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the upload".to_string(),
        ));
    }
    Ok(text)
}
