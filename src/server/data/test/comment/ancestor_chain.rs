use super::*;

/// Tests that walking up from any comment ends at a root without repeating ids.
///
/// Expected: Ok with the chain ending at the forum root and no duplicates
#[tokio::test]
async fn walks_up_to_root_without_cycles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;
    let chain = factory::create_chain(db, user.id, RootTopic::Forum.id(), 6).await?;

    let repo = CommentRepository::new(db);

    for (depth, comment) in chain.iter().enumerate() {
        let ancestors = repo.ancestor_chain(comment.id).await?;

        assert_eq!(ancestors.len(), depth + 1);
        assert_eq!(ancestors.last(), Some(&RootTopic::Forum.id()));

        let mut unique = ancestors.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ancestors.len());
        assert!(!ancestors.contains(&comment.id));
    }

    Ok(())
}

/// Tests the chain of a root.
///
/// Expected: Ok with an empty chain
#[tokio::test]
async fn root_has_no_ancestors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.ancestor_chain(RootTopic::Event.id()).await?.is_empty());

    Ok(())
}
