use super::*;

/// Tests counting descendants across several levels and statuses.
///
/// Builds a tree where one branch is cancelled and still has a reply below it,
/// then verifies every comment under the target is counted.
///
/// Expected: Ok(5)
#[tokio::test]
async fn counts_all_descendants_regardless_of_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let target = factory::create_reply(db, user.id, 3).await?;
    let a = factory::create_reply(db, user.id, target.id).await?;
    factory::create_reply(db, user.id, a.id).await?;
    let cancelled = factory::comment::CommentFactory::new(db, user.id, target.id)
        .status("CANCELLED")
        .cancel_reason("spam")
        .build()
        .await?;
    let below_cancelled = factory::create_reply(db, user.id, cancelled.id).await?;
    factory::create_reply(db, user.id, below_cancelled.id).await?;
    // Sibling of target, not a descendant
    factory::create_reply(db, user.id, 3).await?;

    let repo = CommentRepository::new(db);
    let count = repo.count_descendants(target.id).await?;

    assert_eq!(count, 5);

    Ok(())
}

/// Tests counting descendants of a leaf.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_leaf() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;
    let leaf = factory::create_reply(db, user.id, 3).await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.count_descendants(leaf.id).await?, 0);

    Ok(())
}
