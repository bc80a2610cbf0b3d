use crate::config::Config;
use auth_client::AuthClient;
use axum::extract::FromRef;
use document_store::DocumentStore;
use notemon_db_client::NotemonDb;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub db: NotemonDb,
    pub gemini: Arc<gemini_client::Client>,
    pub auth: Arc<AuthClient>,
    pub document_store: Arc<DocumentStore>,
    pub config: Arc<Config>,
}
