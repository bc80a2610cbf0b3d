use crate::AuthClient;
use crate::error::AuthClientError;

/// The authenticated user as reported by the auth service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

impl AuthClient {
    /// Validates a bearer token by asking the auth service who it belongs to.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthClientError> {
        let res = self
            .client
            .get(format!("{}/auth/v1/user", self.url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthClientError::RequestError {
                details: e.to_string(),
            })?;

        match res.status() {
            reqwest::StatusCode::OK => {
                res.json::<AuthUser>()
                    .await
                    .map_err(|e| AuthClientError::RequestError {
                        details: e.to_string(),
                    })
            }
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(AuthClientError::InvalidToken)
            }
            status_code => {
                let body = res.text().await.unwrap_or_default();
                tracing::error!(
                    body = %body,
                    status = %status_code,
                    "unexpected response from auth service"
                );
                Err(AuthClientError::UnexpectedResponse {
                    status: status_code.as_u16(),
                    body,
                })
            }
        }
    }
}
