use crate::api::context::ApiContext;
use crate::api::error::internal_error;
use crate::core::constants::processing_generation_config;
use crate::core::format::{extract_key_points, parse_faqs};
use crate::core::prompts::build_prompt;
use axum::{Extension, Json, extract::State, response::Response};
use gemini_client::types::request::{GenerateContentRequestBody, Part};
use models_notemon::response::ProcessDocumentResponse;
use models_notemon::{Action, NewAiSession, ProcessDocumentRequest, UserContext};
use notemon_db_client::paths;

#[utoipa::path(
    post,
    path = paths::PROCESS_DOCUMENT,
    request_body = ProcessDocumentRequest,
    responses(
        (status = 200, description = "Generated content, shaped by the requested action", body = ProcessDocumentResponse),
        (status = 500, description = "Processing failed", body = models_notemon::response::ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id = %user_context.user_id, action = %req.action, document_id = %req.document_id))]
pub async fn process_document_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<ProcessDocumentRequest>,
) -> Result<Json<ProcessDocumentResponse>, Response> {
    let document = ctx
        .db
        .get_document(req.document_id, &user_context.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to fetch document");
            internal_error("Document not found or access denied")
        })?
        .ok_or_else(|| internal_error("Document not found or access denied"))?;

    if req.action == Action::Chat && req.prompt.as_deref().unwrap_or_default().is_empty() {
        return Err(internal_error("Missing prompt for chat"));
    }

    let prompt = build_prompt(
        req.action,
        &document.content,
        req.prompt.as_deref(),
        req.language.as_deref(),
    );

    let request = GenerateContentRequestBody::from_parts(vec![Part::text(prompt)])
        .with_generation_config(processing_generation_config());

    let generated_content = ctx
        .gemini
        .generate()
        .create_text(request)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "gemini api error");
            internal_error(format!("Gemini API error: {e}"))
        })?;

    // Append the exchange to the audit log. A failed insert is logged but
    // never fails the request.
    if let Err(e) = ctx
        .db
        .insert_ai_session(NewAiSession {
            user_id: user_context.user_id.clone(),
            document_id: document.id,
            session_type: req.action.as_str().to_string(),
            prompt: match req.action {
                Action::Chat => req.prompt.clone(),
                _ => None,
            },
            response: generated_content.clone(),
        })
        .await
    {
        tracing::error!(error = ?e, "error saving ai session");
    }

    let response = match req.action {
        Action::Summary => ProcessDocumentResponse::Summary {
            key_points: extract_key_points(&generated_content),
            summary: generated_content,
        },
        Action::Faq => ProcessDocumentResponse::Faq {
            faqs: parse_faqs(&generated_content),
        },
        Action::Chat => ProcessDocumentResponse::Chat {
            chat: generated_content,
        },
    };

    Ok(Json(response))
}
