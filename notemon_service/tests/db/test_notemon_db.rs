use crate::common::create_test_document;
use models_notemon::NewAiSession;
use notemon_db_client::NotemonDb;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../notemon_db_client/migrations")]
async fn insert_and_get_document(pool: PgPool) -> sqlx::Result<()> {
    let db = NotemonDb::new(pool);

    let new = create_test_document("user_a");
    let inserted = db.insert_document(new.clone()).await.unwrap();
    assert_eq!(inserted.name, new.name);
    assert_eq!(inserted.content, new.content);

    let fetched = db.get_document(inserted.id, "user_a").await.unwrap();
    assert_eq!(fetched.unwrap().id, inserted.id);
    Ok(())
}

#[sqlx::test(migrations = "../notemon_db_client/migrations")]
async fn document_reads_are_owner_scoped(pool: PgPool) -> sqlx::Result<()> {
    let db = NotemonDb::new(pool);

    let inserted = db
        .insert_document(create_test_document("user_a"))
        .await
        .unwrap();

    // another user cannot see the document, nor can a random id resolve
    assert!(db.get_document(inserted.id, "user_b").await.unwrap().is_none());
    assert!(
        db.get_document(Uuid::new_v4(), "user_a")
            .await
            .unwrap()
            .is_none()
    );
    Ok(())
}

#[sqlx::test(migrations = "../notemon_db_client/migrations")]
async fn list_documents_is_scoped_and_newest_first(pool: PgPool) -> sqlx::Result<()> {
    let db = NotemonDb::new(pool);

    let first = db
        .insert_document(create_test_document("user_a"))
        .await
        .unwrap();
    let second = db
        .insert_document(create_test_document("user_a"))
        .await
        .unwrap();
    db.insert_document(create_test_document("user_b"))
        .await
        .unwrap();

    let listed = db.list_documents("user_a").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|d| d.id == first.id || d.id == second.id));
    assert!(listed[0].created_at >= listed[1].created_at);
    Ok(())
}

#[sqlx::test(migrations = "../notemon_db_client/migrations")]
async fn delete_document_cascades_sessions(pool: PgPool) -> sqlx::Result<()> {
    let db = NotemonDb::new(pool);

    let document = db
        .insert_document(create_test_document("user_a"))
        .await
        .unwrap();
    db.insert_ai_session(NewAiSession {
        user_id: "user_a".into(),
        document_id: document.id,
        session_type: "summary".into(),
        prompt: None,
        response: "a summary".into(),
    })
    .await
    .unwrap();

    // wrong owner deletes nothing
    assert!(
        db.delete_document(document.id, "user_b")
            .await
            .unwrap()
            .is_none()
    );

    let deleted = db
        .delete_document(document.id, "user_a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deleted.file_path, document.file_path);
    assert!(db.get_document(document.id, "user_a").await.unwrap().is_none());
    Ok(())
}

#[sqlx::test(migrations = "../notemon_db_client/migrations")]
async fn ai_session_log_is_append_only_metadata(pool: PgPool) -> sqlx::Result<()> {
    let db = NotemonDb::new(pool);

    let document = db
        .insert_document(create_test_document("user_a"))
        .await
        .unwrap();

    let session = db
        .insert_ai_session(NewAiSession {
            user_id: "user_a".into(),
            document_id: document.id,
            session_type: "chat".into(),
            prompt: Some("what is this?".into()),
            response: "an answer".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.session_type, "chat");
    assert_eq!(session.prompt.as_deref(), Some("what is this?"));
    assert_eq!(session.document_id, document.id);
    Ok(())
}
