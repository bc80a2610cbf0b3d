use crate::api::context::ApiContext;
use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use notemon_db_client::paths;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod context;
pub mod cors;
pub mod documents;
pub mod error;
pub mod health;
pub mod process;
pub mod swagger;
pub mod upload;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let cors = cors::cors_layer();

    let port = state.config.port;
    let environment = state.config.environment;
    let app = api_router(state.clone())
        .layer(cors.clone())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(50 * 1024 * 1024)) // base64 payloads
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .nest(paths::HEALTH, health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("failed to bind TCP listener")?;

    tracing::info!(port, ?environment, "notemon service is up and running");

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

pub fn api_router(api_context: ApiContext) -> Router {
    Router::new()
        .route(paths::UPLOAD_DOCUMENT, post(upload::upload_document_handler))
        .route(
            paths::PROCESS_DOCUMENT,
            post(process::process_document_handler),
        )
        .route(paths::DOCUMENTS, get(documents::list_documents_handler))
        .route(
            "/documents/:document_id",
            delete(documents::delete_document_handler),
        )
        .layer(
            ServiceBuilder::new().layer(axum::middleware::from_fn_with_state(
                api_context.auth.clone(),
                auth::attach_user,
            )),
        )
        .with_state(api_context)
}
