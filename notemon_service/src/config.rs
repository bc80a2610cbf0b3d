use anyhow::Context;
pub use notemon_entrypoint::Environment;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, which is the recommended way
/// to populate the container. See `.env.sample` for details.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// api key for the generative-language API
    pub gemini_api_key: String,
    /// base url of the external auth service
    pub auth_service_url: String,
    /// project service key sent to the auth service
    pub auth_service_key: String,
    /// bucket holding uploaded document bytes
    pub document_bucket: String,
}

impl Config {
    #[tracing::instrument(err)]
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let environment = Environment::new_or_prod();

        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be provided")?;
        let auth_service_url =
            std::env::var("AUTH_SERVICE_URL").context("AUTH_SERVICE_URL must be provided")?;
        let auth_service_key =
            std::env::var("AUTH_SERVICE_KEY").context("AUTH_SERVICE_KEY must be provided")?;
        let document_bucket =
            std::env::var("DOCUMENT_BUCKET").context("DOCUMENT_BUCKET must be provided")?;

        Ok(Config {
            database_url,
            port,
            environment,
            gemini_api_key,
            auth_service_url,
            auth_service_key,
            document_bucket,
        })
    }
}
