use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Non-2xx status returned by the API
    #[error("gemini api error: {status}")]
    Api { status: u16, body: String },
    /// The response carried no candidate text
    #[error("no content generated")]
    NoContent,
    /// error from reqwest
    #[error("http error")]
    Reqwest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GeminiError>;
