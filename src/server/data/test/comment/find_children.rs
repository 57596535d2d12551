use super::*;

/// Tests that direct children are returned in every status, oldest first.
///
/// Expected: Ok with all three children ordered by id
#[tokio::test]
async fn returns_children_of_all_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let parent = factory::create_reply(db, user.id, 3).await?;
    let first = factory::create_reply(db, user.id, parent.id).await?;
    let cancelled = factory::comment::CommentFactory::new(db, user.id, parent.id)
        .status("CANCELLED")
        .cancel_reason("spam")
        .build()
        .await?;
    let pending = factory::comment::CommentFactory::new(db, user.id, parent.id)
        .status("PENDING_MODERATION")
        .build()
        .await?;
    // Grandchild must not be returned
    factory::create_reply(db, user.id, first.id).await?;

    let repo = CommentRepository::new(db);
    let children = repo.find_children(parent.id).await?;

    let ids: Vec<i32> = children.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, cancelled.id, pending.id]);

    Ok(())
}

/// Tests the batched published-children query used for thread expansion.
///
/// Verifies children of several parents are returned together, ordered by id,
/// without cancelled or pending comments.
///
/// Expected: Ok with only the published children of both parents
#[tokio::test]
async fn returns_published_children_of_many_parents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let a = factory::create_reply(db, user.id, 3).await?;
    let b = factory::create_reply(db, user.id, 3).await?;
    let a1 = factory::create_reply(db, user.id, a.id).await?;
    let b1 = factory::create_reply(db, user.id, b.id).await?;
    factory::comment::CommentFactory::new(db, user.id, a.id)
        .status("CANCELLED")
        .cancel_reason("off topic")
        .build()
        .await?;
    let a2 = factory::create_reply(db, user.id, a.id).await?;

    let repo = CommentRepository::new(db);
    let children = repo.find_published_children(&[b.id, a.id]).await?;

    let ids: Vec<i32> = children.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a1.id, b1.id, a2.id]);

    Ok(())
}

/// Tests the batched query with no parents.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_nothing_for_no_parents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let children = repo.find_published_children(&[]).await?;

    assert!(children.is_empty());

    Ok(())
}

/// Tests listing a user's comments across statuses.
///
/// Expected: Ok with only the user's comments, cancelled included
#[tokio::test]
async fn finds_comments_by_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_reply(db, author.id, 3).await?;
    factory::create_reply(db, other.id, first.id).await?;
    let cancelled = factory::comment::CommentFactory::new(db, author.id, 3)
        .status("CANCELLED")
        .cancel_reason("duplicate")
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.find_by_author(author.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, cancelled.id]);
    assert_eq!(comments[1].comment_status, CommentStatus::Cancelled);

    Ok(())
}
