//! Shared models for the notemon backend: the `documents` / `ai_sessions` rows,
//! the API request/response payloads, and the error body every handler returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod response;

/// A user-uploaded file plus its extracted text and metadata.
/// Immutable after insert; every downstream AI action reads `content`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    /// Text extracted at upload time. For non-text uploads this is whatever the
    /// generative API returned, or the `Document: <name>` placeholder when
    /// extraction failed.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only audit record of one exchange with the generative API.
/// Never read back by the application.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct AiSession {
    pub id: Uuid,
    pub user_id: String,
    pub document_id: Uuid,
    pub session_type: String,
    pub prompt: Option<String>,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// The AI action requested against a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Summary,
    Faq,
    Chat,
}

impl Action {
    /// The `session_type` value stored in `ai_sessions`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Summary => "summary",
            Action::Faq => "faq",
            Action::Chat => "chat",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller, attached to requests by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub email: Option<String>,
}

/// Body of `POST /upload-document`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentRequest {
    pub file_name: String,
    /// base64-encoded file bytes
    pub file_content: String,
    pub mime_type: Option<String>,
}

/// Body of `POST /process-document`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDocumentRequest {
    pub action: Action,
    pub document_id: Uuid,
    /// The user's question. Required for `chat`, ignored otherwise.
    pub prompt: Option<String>,
    /// Optional language hint appended to the instruction preamble.
    pub language: Option<String>,
}

/// Values for a new `documents` row, produced by the upload handler.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: String,
    pub name: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub content: String,
}

/// Values for a new `ai_sessions` row.
#[derive(Debug, Clone)]
pub struct NewAiSession {
    pub user_id: String,
    pub document_id: Uuid,
    pub session_type: String,
    pub prompt: Option<String>,
    pub response: String,
}
