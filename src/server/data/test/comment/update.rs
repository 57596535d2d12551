use super::*;

/// Tests that a content edit changes title and body only.
///
/// Expected: Ok with new content, unchanged status and a modification time
#[tokio::test]
async fn content_edit_leaves_status_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;
    let comment = factory::create_reply(db, user.id, 3).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_content(
            comment.id,
            ContentEdit {
                title: "Edited".to_string(),
                body: "Edited body".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.body, "Edited body");
    assert_eq!(updated.comment_status, CommentStatus::Published);
    assert!(updated.modified_at.is_some());

    Ok(())
}

/// Tests that a status edit keeps the cancel reason only while cancelled.
///
/// Cancels a comment with a reason, then republishes it with a stale reason.
///
/// Expected: Ok with the reason stored on cancel and cleared on republish
#[tokio::test]
async fn status_edit_manages_cancel_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;
    let comment = factory::create_reply(db, user.id, 3).await?;

    let repo = CommentRepository::new(db);
    let cancelled = repo
        .update_status(
            comment.id,
            StatusEdit {
                comment_status: CommentStatus::Cancelled,
                cancel_reason: Some("spam".to_string()),
            },
        )
        .await?;

    assert_eq!(cancelled.comment_status, CommentStatus::Cancelled);
    assert_eq!(cancelled.cancel_reason.as_deref(), Some("spam"));
    assert_eq!(cancelled.title, comment.title);

    let republished = repo
        .update_status(
            comment.id,
            StatusEdit {
                comment_status: CommentStatus::Published,
                cancel_reason: Some("stale".to_string()),
            },
        )
        .await?;

    assert_eq!(republished.comment_status, CommentStatus::Published);
    assert!(republished.cancel_reason.is_none());

    Ok(())
}
