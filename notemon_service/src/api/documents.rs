use crate::api::context::ApiContext;
use crate::api::error::internal_error;
use axum::{
    Extension, Json,
    extract::{Path, State},
    response::Response,
};
use models_notemon::UserContext;
use models_notemon::response::DocumentListEntry;
use notemon_db_client::paths;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct Params {
    pub document_id: Uuid,
}

#[utoipa::path(
    get,
    path = paths::DOCUMENTS,
    responses(
        (status = 200, description = "The caller's documents, newest first", body = Vec<DocumentListEntry>),
        (status = 500, description = "Query failed", body = models_notemon::response::ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id = %user_context.user_id))]
pub async fn list_documents_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<Vec<DocumentListEntry>>, Response> {
    let documents = ctx
        .db
        .list_documents(&user_context.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to list documents");
            internal_error("Failed to list documents")
        })?;

    Ok(Json(documents))
}

#[utoipa::path(
    delete,
    path = "/documents/{document_id}",
    responses(
        (status = 200, description = "Document removed"),
        (status = 500, description = "Delete failed", body = models_notemon::response::ErrorResponse),
    ),
    params(("document_id" = Uuid, Path, description = "id of the document")),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id = %user_context.user_id))]
pub async fn delete_document_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { document_id }): Path<Params>,
) -> Result<Json<serde_json::Value>, Response> {
    let document = ctx
        .db
        .delete_document(document_id, &user_context.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to delete document");
            internal_error("Failed to delete document")
        })?
        .ok_or_else(|| internal_error("Document not found or access denied"))?;

    // Stored bytes are cleaned up best-effort; the row is already gone.
    if let Err(e) = ctx.document_store.delete(&document.file_path).await {
        tracing::error!(error = ?e, file_path = %document.file_path, "failed to delete stored object");
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
