use super::*;

/// Tests creating a reply under an existing comment.
///
/// Verifies that the repository stores the comment as published, with the given
/// author and parent and no modification time.
///
/// Expected: Ok with a published reply linked to its parent
#[tokio::test]
async fn creates_published_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            user_id: user.id,
            parent_comment_id: RootTopic::Forum.id(),
            title: "Welcome".to_string(),
            body: "First post".to_string(),
            comment_type: CommentType::Reply,
        })
        .await?;

    assert_eq!(comment.user_id, Some(user.id));
    assert_eq!(comment.parent_comment_id, Some(RootTopic::Forum.id()));
    assert_eq!(comment.comment_status, CommentStatus::Published);
    assert_eq!(comment.comment_type, CommentType::Reply);
    assert!(comment.cancel_reason.is_none());
    assert!(comment.modified_at.is_none());

    Ok(())
}

/// Tests that a comment can't reference a parent that doesn't exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParams {
            user_id: user.id,
            parent_comment_id: 999,
            title: "Orphan".to_string(),
            body: "No parent".to_string(),
            comment_type: CommentType::Reply,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests inserting a reserved root topic.
///
/// Verifies the root keeps its fixed id and has neither parent nor author.
///
/// Expected: Ok with an authorless, parentless topic
#[tokio::test]
async fn creates_root_with_reserved_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let root = repo.create_root(RootTopic::Page).await?;

    assert_eq!(root.id, 2);
    assert!(root.parent_comment_id.is_none());
    assert!(root.user_id.is_none());
    assert_eq!(root.comment_type, CommentType::Topic);

    Ok(())
}
