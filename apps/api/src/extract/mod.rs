//! Résumé text extraction — turns an uploaded document into the opaque
//! plain-text string the pipeline consumes.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub chars: usize,
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart `file` field (PDF or plain text). Unreadable or empty
/// documents fail with an extraction error; the pipeline never sees them.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut extracted: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_lowercase();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let text = if filename.ends_with(".pdf") {
            // PDF parsing is CPU-bound.
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
                })?
                .map_err(|e| AppError::Extraction(format!("PDF extraction failed: {e}")))?
        } else if filename.ends_with(".txt") {
            String::from_utf8(data.to_vec())
                .map_err(|_| AppError::Extraction("file is not valid UTF-8 text".to_string()))?
        } else {
            return Err(AppError::Extraction(format!(
                "unsupported file type: {filename:?} (expected .pdf or .txt)"
            )));
        };

        extracted = Some(text);
    }

    let text = extracted
        .ok_or_else(|| AppError::Validation("missing multipart field 'file'".to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no readable text found in the file".to_string(),
        ));
    }

    let chars = text.chars().count();
    Ok(Json(ExtractResponse { text, chars }))
}
