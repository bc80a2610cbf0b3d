use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthClientError {
    /// The token was rejected by the auth service
    #[error("invalid token")]
    InvalidToken,
    /// The request could not be built or sent
    #[error("auth request failed: {details}")]
    RequestError { details: String },
    /// an unexpected response from the auth service
    #[error("unexpected auth service response: {status}")]
    UnexpectedResponse { status: u16, body: String },
}
