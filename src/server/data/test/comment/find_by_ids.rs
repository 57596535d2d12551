use super::*;

/// Tests the batched lookup used by the moderation queue.
///
/// Expected: Ok with every stored comment in id order, in any status, unknown ids skipped
#[tokio::test]
async fn returns_comments_for_known_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let first = factory::create_reply(db, user.id, 3).await?;
    let cancelled = factory::comment::CommentFactory::new(db, user.id, 3)
        .status("CANCELLED")
        .cancel_reason("spam")
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.find_by_ids(&[cancelled.id, 404, first.id]).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, cancelled.id]);
    assert_eq!(comments[1].comment_status, CommentStatus::Cancelled);

    Ok(())
}

/// Tests the lookup with no ids.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let comments = CommentRepository::new(db).find_by_ids(&[]).await?;

    assert!(comments.is_empty());

    Ok(())
}
