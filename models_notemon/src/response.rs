//! Response bodies returned by the API handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A plain old json error response for use with axum.
/// Every handler failure is surfaced through this body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Message to explain failure
    pub error: String,
}

/// The document metadata echoed back after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub id: Uuid,
    pub name: String,
    pub size: i64,
    pub upload_date: DateTime<Utc>,
}

/// Body of a successful `POST /upload-document`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadDocumentResponse {
    pub success: bool,
    pub document: UploadedDocument,
}

/// One question/answer pair recovered from the generated FAQ text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Body of a successful `POST /process-document`. The shape depends on the
/// requested action, matching the original wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProcessDocumentResponse {
    #[serde(rename_all = "camelCase")]
    Summary {
        summary: String,
        key_points: Option<Vec<String>>,
    },
    Faq { faqs: Vec<FaqEntry> },
    Chat { chat: String },
}

/// One row of `GET /documents`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListEntry {
    pub id: Uuid,
    pub name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}
