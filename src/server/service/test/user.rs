use crate::server::{
    error::AppError,
    model::user::{SYSTEM_AUTHOR_NAME, UNKNOWN_AUTHOR_NAME},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests resolving author names for a mix of users, roots and deleted ids.
///
/// Expected: Ok with real names, "System" for no author and a placeholder for unknown ids
#[tokio::test]
async fn resolves_author_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let frank = factory::user::UserFactory::new(db)
        .name("Frank")
        .build()
        .await?;

    let names = UserService::new(db)
        .author_names([Some(frank.id), None, Some(frank.id + 100)])
        .await?;

    assert_eq!(names.name_for(Some(frank.id)), "Frank");
    assert_eq!(names.name_for(None), SYSTEM_AUTHOR_NAME);
    assert_eq!(names.name_for(Some(frank.id + 100)), UNKNOWN_AUTHOR_NAME);

    Ok(())
}

/// Tests granting admin to an existing user.
///
/// Expected: Ok with the returned user marked as admin
#[tokio::test]
async fn grants_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let updated = UserService::new(db).set_admin(user.id, true).await?;

    assert!(updated.admin);

    Ok(())
}

/// Tests granting admin to an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn set_admin_fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).set_admin(3, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
