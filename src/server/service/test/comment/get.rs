use super::*;

/// Tests loading one comment with its descendant count.
///
/// Cancelled descendants still count toward the total.
///
/// Expected: Ok with the author's name and a count of 2
#[tokio::test]
async fn gets_comment_with_descendant_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::user::UserFactory::new(db)
        .name("Carol")
        .build()
        .await?;
    let comment = factory::create_reply(db, author.id, 3).await?;
    factory::create_reply(db, author.id, comment.id).await?;
    factory::comment::CommentFactory::new(db, author.id, comment.id)
        .status("CANCELLED")
        .cancel_reason("dup")
        .build()
        .await?;

    let node = CommentService::new(db).get_comment(comment.id).await?;

    assert_eq!(node.author_name, "Carol");
    assert_eq!(node.child_count, Some(2));
    assert!(node.children.is_empty());

    Ok(())
}

/// Tests loading a comment that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_fails_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db).get_comment(8).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing everything a user wrote.
///
/// Expected: Ok with the user's comments in creation order, including cancelled ones
#[tokio::test]
async fn lists_comments_by_author() -> Result<(), AppError> {
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
    let reply = factory::create_reply(db, other.id, first.id).await?;
    let second = factory::comment::CommentFactory::new(db, author.id, reply.id)
        .status("CANCELLED")
        .cancel_reason("rude")
        .build()
        .await?;

    let nodes = CommentService::new(db)
        .get_comments_by_author(author.id)
        .await?;

    let ids: Vec<i32> = nodes.iter().map(|node| node.comment.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(nodes[0].child_count, Some(2));
    assert_eq!(nodes[0].author_name, author.name);

    Ok(())
}

/// Tests listing comments for an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn list_fails_for_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db).get_comments_by_author(9).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
