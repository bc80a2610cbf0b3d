mod delete;
mod put;

/// Object storage for uploaded document bytes, bound to the documents bucket.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl DocumentStore {
    pub fn new(inner: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            inner,
            bucket: bucket.into(),
        }
    }

    /// Stores raw file bytes at the provided key with their content type.
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    pub async fn put(&self, key: &str, content: &[u8], content_type: &str) -> anyhow::Result<()> {
        put::put(&self.inner, &self.bucket, key, content, content_type).await
    }

    /// Deletes the object at the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> anyhow::Result<()> {
        delete::delete(&self.inner, &self.bucket, key).await
    }
}
