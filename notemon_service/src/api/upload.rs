use crate::api::context::ApiContext;
use crate::api::error::internal_error;
use crate::service::extract::extract_text;
use axum::{Extension, Json, extract::State, response::Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use models_notemon::response::{UploadDocumentResponse, UploadedDocument};
use models_notemon::{NewDocument, UploadDocumentRequest, UserContext};
use notemon_db_client::paths;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

#[utoipa::path(
    post,
    path = paths::UPLOAD_DOCUMENT,
    request_body = UploadDocumentRequest,
    responses(
        (status = 200, description = "Document stored and extracted", body = UploadDocumentResponse),
        (status = 500, description = "Upload failed", body = models_notemon::response::ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id = %user_context.user_id, file_name = %req.file_name))]
pub async fn upload_document_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UploadDocumentRequest>,
) -> Result<Json<UploadDocumentResponse>, Response> {
    if req.file_name.is_empty() || req.file_content.is_empty() {
        return Err(internal_error("Missing fileName or fileContent"));
    }

    let bytes = BASE64.decode(&req.file_content).map_err(|e| {
        tracing::error!(error = ?e, "fileContent is not valid base64");
        internal_error("Invalid file content encoding")
    })?;

    let mime_type = req
        .mime_type
        .clone()
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

    let content = extract_text(
        &ctx.gemini,
        &req.file_name,
        &mime_type,
        &bytes,
        &req.file_content,
    )
    .await;

    let file_path = format!(
        "{}/{}_{}",
        user_context.user_id,
        chrono::Utc::now().timestamp_millis(),
        req.file_name
    );

    ctx.document_store
        .put(&file_path, &bytes, &mime_type)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "storage upload error");
            internal_error(format!("Upload failed: {e}"))
        })?;

    let document = match ctx
        .db
        .insert_document(NewDocument {
            user_id: user_context.user_id.clone(),
            name: req.file_name.clone(),
            file_path: file_path.clone(),
            file_size: bytes.len() as i64,
            mime_type,
            content,
        })
        .await
    {
        Ok(document) => document,
        Err(e) => {
            // Clean up the just-stored object so the bucket does not leak
            // orphans when the metadata insert fails.
            if let Err(delete_err) = ctx.document_store.delete(&file_path).await {
                tracing::error!(error = ?delete_err, file_path = %file_path, "failed to clean up stored object");
            }
            tracing::error!(error = ?e, "database insert error");
            return Err(internal_error(format!("Database error: {e}")));
        }
    };

    Ok(Json(UploadDocumentResponse {
        success: true,
        document: UploadedDocument {
            id: document.id,
            name: document.name,
            size: document.file_size,
            upload_date: document.created_at,
        },
    }))
}
