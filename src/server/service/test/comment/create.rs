use super::*;

/// Tests creating a reply through the service.
///
/// Expected: Ok with a published comment under the given parent
#[tokio::test]
async fn creates_published_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let comment = CommentService::new(db)
        .create(reply(user.id, 3, "Hello", "World"))
        .await?;

    assert_eq!(comment.comment_status, CommentStatus::Published);
    assert_eq!(comment.parent_comment_id, Some(3));

    Ok(())
}

/// Tests creating under a parent that doesn't exist.
///
/// Expected: Err(AppError::NotFound) and nothing written
#[tokio::test]
async fn fails_for_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;

    let service = CommentService::new(db);
    let result = service.create(reply(user.id, 999, "Hello", "World")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_comments_by_author(user.id).await?.is_empty());

    Ok(())
}

/// Tests creating as a user that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;

    let result = CommentService::new(db)
        .create(reply(500, 3, "Hello", "World"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests title and body length validation.
///
/// Blank content and content one character over the limit are rejected, while
/// content exactly at the limit is accepted.
///
/// Expected: Err(AppError::BadRequest) for invalid content, Ok at the limit
#[tokio::test]
async fn validates_content_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let user = factory::create_user(db).await?;
    let service = CommentService::new(db);

    let long_title = "t".repeat(MAX_TITLE_CHARS + 1);
    let long_body = "b".repeat(MAX_BODY_CHARS + 1);
    let invalid = [
        ("   ", "body"),
        ("title", ""),
        (long_title.as_str(), "body"),
        ("title", long_body.as_str()),
    ];

    for (title, body) in invalid {
        let result = service.create(reply(user.id, 3, title, body)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let max_title = "é".repeat(MAX_TITLE_CHARS);
    let max_body = "b".repeat(MAX_BODY_CHARS);
    service
        .create(reply(user.id, 3, &max_title, &max_body))
        .await?;

    Ok(())
}
