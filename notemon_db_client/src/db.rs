use anyhow::Result;
use models_notemon::{AiSession, Document, NewAiSession, NewDocument, response::DocumentListEntry};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NotemonDb {
    pool: PgPool,
}

impl NotemonDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the metadata + extracted content row for a freshly stored upload.
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id, name = %new.name))]
    pub async fn insert_document(&self, new: NewDocument) -> Result<Document> {
        let document = sqlx::query_as::<_, Document>(
            r#"
INSERT INTO documents (user_id, name, file_path, file_size, mime_type, content)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING id, user_id, name, file_path, file_size, mime_type, content, created_at
            "#,
        )
        .bind(&new.user_id)
        .bind(&new.name)
        .bind(&new.file_path)
        .bind(new.file_size)
        .bind(&new.mime_type)
        .bind(&new.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// Fetches a document scoped to its owner. Returns `None` when the id does
    /// not exist or belongs to another user.
    #[tracing::instrument(skip(self))]
    pub async fn get_document(&self, id: Uuid, user_id: &str) -> Result<Option<Document>> {
        let document = sqlx::query_as::<_, Document>(
            r#"
SELECT id, user_id, name, file_path, file_size, mime_type, content, created_at
FROM documents
WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    /// Lists the caller's documents, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_documents(&self, user_id: &str) -> Result<Vec<DocumentListEntry>> {
        let documents = sqlx::query_as::<_, DocumentListEntry>(
            r#"
SELECT id, name, file_size, mime_type, created_at
FROM documents
WHERE user_id = $1
ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    /// Deletes a document scoped to its owner and returns the removed row so
    /// the caller can clean up the stored object. Sessions cascade.
    #[tracing::instrument(skip(self))]
    pub async fn delete_document(&self, id: Uuid, user_id: &str) -> Result<Option<Document>> {
        let document = sqlx::query_as::<_, Document>(
            r#"
DELETE FROM documents
WHERE id = $1 AND user_id = $2
RETURNING id, user_id, name, file_path, file_size, mime_type, content, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    /// Appends one request/response exchange to the audit log.
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id, session_type = %new.session_type))]
    pub async fn insert_ai_session(&self, new: NewAiSession) -> Result<AiSession> {
        let session = sqlx::query_as::<_, AiSession>(
            r#"
INSERT INTO ai_sessions (user_id, document_id, session_type, prompt, response)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, user_id, document_id, session_type, prompt, response, created_at
            "#,
        )
        .bind(&new.user_id)
        .bind(new.document_id)
        .bind(&new.session_type)
        .bind(&new.prompt)
        .bind(&new.response)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }
}
