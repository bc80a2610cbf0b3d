use super::Client;
use crate::error::{GeminiError, Result};
use crate::types::request::GenerateContentRequestBody;
use crate::types::response::GenerateContentResponse;

pub struct Generate<'c> {
    inner: &'c Client,
}

impl Client {
    pub fn generate(&'_ self) -> Generate<'_> {
        Generate { inner: self }
    }
}

impl Generate<'_> {
    /// One unary `generateContent` call against the configured model.
    pub async fn create<I>(&self, request: I) -> Result<GenerateContentResponse>
    where
        I: Into<GenerateContentRequestBody>,
    {
        let request = request.into();
        let path = format!("/v1beta/models/{}:generateContent", self.inner.model());
        self.inner.post(&path, &request).await
    }

    /// As [Self::create], but requires candidate text and returns it owned.
    pub async fn create_text<I>(&self, request: I) -> Result<String>
    where
        I: Into<GenerateContentRequestBody>,
    {
        let response = self.create(request).await?;
        response
            .first_text()
            .map(str::to_owned)
            .ok_or(GeminiError::NoContent)
    }
}
