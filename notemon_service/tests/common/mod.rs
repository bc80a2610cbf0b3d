use models_notemon::NewDocument;
use notemon_service::api::context::ApiContext;
use notemon_service::config::Config;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn create_test_document(user_id: &str) -> NewDocument {
    let doc_num = COUNTER.fetch_add(1, Ordering::Relaxed);
    NewDocument {
        user_id: user_id.to_string(),
        name: format!("notes_{doc_num}.txt"),
        file_path: format!("{user_id}/1700000000000_notes_{doc_num}.txt"),
        file_size: 42,
        mime_type: "text/plain".to_string(),
        content: "some extracted note content".to_string(),
    }
}

/// An [ApiContext] whose upstream clients point at unroutable endpoints, for
/// exercising routes that never reach them.
pub fn test_api_context(pool: PgPool) -> ApiContext {
    let s3_config = aws_sdk_s3::Config::builder()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .build();
    let document_store =
        document_store::DocumentStore::new(aws_sdk_s3::Client::from_conf(s3_config), "test-bucket");

    let gemini = gemini_client::Client::with_config(
        gemini_client::Config::new("test-key".into()).with_api_base("http://127.0.0.1:1"),
    );

    let auth = auth_client::AuthClient::new("test-key".into(), "http://127.0.0.1:1".into());

    let config = Config {
        database_url: "unused".into(),
        port: 0,
        environment: notemon_service::config::Environment::Local,
        gemini_api_key: "test-key".into(),
        auth_service_url: "http://127.0.0.1:1".into(),
        auth_service_key: "test-key".into(),
        document_bucket: "test-bucket".into(),
    };

    ApiContext {
        db: notemon_db_client::NotemonDb::new(pool),
        gemini: Arc::new(gemini),
        auth: Arc::new(auth),
        document_store: Arc::new(document_store),
        config: Arc::new(config),
    }
}
