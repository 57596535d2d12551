use super::*;

/// Tests that the author edits content and any status in the request is ignored.
///
/// Expected: Ok with new content and the comment still published
#[tokio::test]
async fn author_edits_content_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let comment = factory::create_reply(db, author.id, 3).await?;

    let updated = CommentService::new(db)
        .update(
            &User::from_entity(author),
            UpdateCommentParams {
                id: comment.id,
                title: None,
                body: Some("Corrected body".to_string()),
                comment_status: Some(CommentStatus::Cancelled),
                cancel_reason: Some("please remove".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.title, comment.title);
    assert_eq!(updated.body, "Corrected body");
    assert_eq!(updated.comment_status, CommentStatus::Published);
    assert!(updated.cancel_reason.is_none());
    assert!(updated.modified_at.is_some());

    Ok(())
}

/// Tests that an author who is also an admin still takes the content path.
///
/// Expected: Ok with content changed and status untouched
#[tokio::test]
async fn admin_author_takes_content_path() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let admin = factory::create_admin(db).await?;
    let comment = factory::create_reply(db, admin.id, 3).await?;

    let updated = CommentService::new(db)
        .update(
            &User::from_entity(admin),
            UpdateCommentParams {
                id: comment.id,
                title: Some("New title".to_string()),
                body: None,
                comment_status: Some(CommentStatus::Cancelled),
                cancel_reason: Some("spam".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.comment_status, CommentStatus::Published);

    Ok(())
}

/// Tests that a non-author admin changes status only.
///
/// Expected: Ok with the comment cancelled, reason stored and content unchanged
#[tokio::test]
async fn admin_cancels_with_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let comment = factory::create_reply(db, author.id, 3).await?;

    let mut params = status_change(comment.id, CommentStatus::Cancelled, Some("  spam  "));
    params.title = Some("Hijacked".to_string());

    let service = CommentService::new(db);
    let updated = service.update(&User::from_entity(admin), params).await?;

    assert_eq!(updated.comment_status, CommentStatus::Cancelled);
    assert_eq!(updated.cancel_reason.as_deref(), Some("spam"));
    assert_eq!(updated.title, comment.title);

    let stored = service.get_comment(comment.id).await?;
    assert_eq!(stored.comment.comment_status, CommentStatus::Cancelled);

    Ok(())
}

/// Tests that an admin can't moderate a reserved root topic.
///
/// Expected: Err(AppError::InvalidState) with the root still published and its thread readable
#[tokio::test]
async fn admin_cannot_cancel_root_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let admin = factory::create_admin(db).await?;
    let author = factory::create_user(db).await?;
    factory::create_reply(db, author.id, RootTopic::Forum.id()).await?;

    let service = CommentService::new(db);
    let result = service
        .update(
            &User::from_entity(admin),
            status_change(RootTopic::Forum.id(), CommentStatus::Cancelled, Some("spam")),
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));

    let thread = ThreadService::new(db, 64)
        .get_thread(RootTopic::Forum.id(), ThreadDepth::Unbounded)
        .await?;
    assert_eq!(thread.comment.comment_status, CommentStatus::Published);
    assert_eq!(thread.children.len(), 1);

    Ok(())
}

/// Tests that cancelling without a usable reason is rejected.
///
/// Expected: Err(AppError::BadRequest) for a missing and a blank reason, status unchanged
#[tokio::test]
async fn admin_cancel_requires_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let admin = User::from_entity(factory::create_admin(db).await?);
    let comment = factory::create_reply(db, author.id, 3).await?;
    let service = CommentService::new(db);

    let missing = service
        .update(
            &admin,
            status_change(comment.id, CommentStatus::Cancelled, None),
        )
        .await;
    let blank = service
        .update(
            &admin,
            status_change(comment.id, CommentStatus::Cancelled, Some("   ")),
        )
        .await;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let stored = service.get_comment(comment.id).await?;
    assert_eq!(stored.comment.comment_status, CommentStatus::Published);

    Ok(())
}

/// Tests that a moderation update must name a status.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn admin_update_requires_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let comment = factory::create_reply(db, author.id, 3).await?;

    let result = CommentService::new(db)
        .update(
            &User::from_entity(admin),
            UpdateCommentParams {
                id: comment.id,
                title: Some("New".to_string()),
                body: None,
                comment_status: None,
                cancel_reason: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that republishing clears the previous cancel reason.
///
/// Expected: Ok with the comment published and no cancel reason
#[tokio::test]
async fn admin_republish_clears_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let comment = factory::comment::CommentFactory::new(db, author.id, 3)
        .status("CANCELLED")
        .cancel_reason("mistake")
        .build()
        .await?;

    let updated = CommentService::new(db)
        .update(
            &User::from_entity(admin),
            status_change(comment.id, CommentStatus::Published, None),
        )
        .await?;

    assert_eq!(updated.comment_status, CommentStatus::Published);
    assert!(updated.cancel_reason.is_none());

    Ok(())
}

/// Tests that someone who is neither author nor admin can't change anything.
///
/// Expected: Err(AuthError::AccessDenied) and the comment unchanged
#[tokio::test]
async fn rejects_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_root_topics(db).await?;
    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let comment = factory::create_reply(db, author.id, 3).await?;

    let service = CommentService::new(db);
    let result = service
        .update(
            &User::from_entity(stranger),
            UpdateCommentParams {
                id: comment.id,
                title: Some("Defaced".to_string()),
                body: None,
                comment_status: Some(CommentStatus::Cancelled),
                cancel_reason: Some("because".to_string()),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let stored = service.get_comment(comment.id).await?;
    assert_eq!(stored.comment.title, comment.title);
    assert_eq!(stored.comment.comment_status, CommentStatus::Published);
    assert!(stored.comment.modified_at.is_none());

    Ok(())
}

/// Tests updating a comment that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let result = CommentService::new(db)
        .update(
            &User::from_entity(admin),
            status_change(31337, CommentStatus::Published, None),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
