//! Text extraction for uploads. Plain-text files are decoded directly; every
//! other format is shipped to the generative API with an extraction
//! instruction. Extraction never fails the upload: any error degrades to a
//! placeholder so the document row is still created.

use crate::core::constants::extraction_generation_config;
use crate::core::prompts::EXTRACTION_PROMPT;
use gemini_client::types::request::{GenerateContentRequestBody, Part};

/// Content stored when extraction produced nothing usable. Downstream AI
/// actions treat this as real document content; that masking matches the
/// original contract.
pub fn placeholder_content(file_name: &str) -> String {
    format!("Document: {file_name}")
}

/// True when the file can be decoded locally instead of via the API.
pub fn is_plain_text(mime_type: &str) -> bool {
    mime_type.contains("text/")
}

/// Extracts text from the uploaded bytes, falling back to the placeholder on
/// any extraction failure.
#[tracing::instrument(skip(gemini, bytes, base64_content), fields(size = bytes.len()))]
pub async fn extract_text(
    gemini: &gemini_client::Client,
    file_name: &str,
    mime_type: &str,
    bytes: &[u8],
    base64_content: &str,
) -> String {
    if is_plain_text(mime_type) {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let request = GenerateContentRequestBody::from_parts(vec![
        Part::text(EXTRACTION_PROMPT),
        Part::inline_data(mime_type, base64_content),
    ])
    .with_generation_config(extraction_generation_config());

    match gemini.generate().create_text(request).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = ?e, file_name = %file_name, "error extracting text");
            placeholder_content(file_name)
        }
    }
}
