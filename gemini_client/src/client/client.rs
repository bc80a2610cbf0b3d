use crate::config::Config;
use crate::error::{GeminiError, Result};
use reqwest::Client as RequestClient;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Clone, Debug)]
pub struct Client {
    http_client: RequestClient,
    config: Config,
}

impl Client {
    pub fn dangerously_try_from_env() -> Self {
        let config = Config::dangerously_try_from_env();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let client = reqwest::Client::builder().build().expect("reqwest client");
        Self {
            config,
            http_client: client,
        }
    }

    pub fn with_client(self, client: RequestClient) -> Self {
        Self {
            http_client: client,
            ..self
        }
    }

    pub(crate) fn model(&self) -> &str {
        &self.config.model
    }

    /// POSTs a model-scoped path with the api key as a query parameter, the
    /// way the generative-language API authenticates.
    pub(crate) async fn post<I, O>(&self, path: &str, request: &I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.config.api_base, path))
            .query(&[("key", self.config.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "gemini api returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<O>().await?)
    }
}
