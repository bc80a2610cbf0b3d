use anyhow::Context;
use notemon_entrypoint::NotemonEntrypoint;
use notemon_service::api::{self, context::ApiContext};
use notemon_service::config::Config;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[tokio::main]
#[tracing::instrument(err)]
async fn main() -> anyhow::Result<()> {
    NotemonEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("failed to parse config from environment")?;

    tracing::info!("initialized config");

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("failed to connect to notemondb")?;

    tracing::info!("initialized db connection");

    let s3_client = aws_sdk_s3::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region("us-east-1")
            .load()
            .await,
    );
    let document_store = document_store::DocumentStore::new(s3_client, &config.document_bucket);

    tracing::info!("initialized document store");

    let gemini = gemini_client::Client::with_config(gemini_client::Config::new(
        config.gemini_api_key.clone(),
    ));

    let auth = auth_client::AuthClient::new(
        config.auth_service_key.clone(),
        config.auth_service_url.clone(),
    );

    tracing::info!("initialized upstream clients");

    api::setup_and_serve(ApiContext {
        db: notemon_db_client::NotemonDb::new(db),
        gemini: Arc::new(gemini),
        auth: Arc::new(auth),
        document_store: Arc::new(document_store),
        config: Arc::new(config),
    })
    .await
    .context("failed to setup and serve api")?;
    Ok(())
}
