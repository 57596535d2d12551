use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with a non-admin user found again by subject
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            subject: "idp|alice".to_string(),
            name: "Alice".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert!(!user.admin);

    let found = repo.find_by_subject("idp|alice").await?.unwrap();
    assert_eq!(found.id, user.id);

    Ok(())
}

/// Tests that a later login refreshes the name without dropping admin.
///
/// Expected: Ok with the new name and admin still set
#[tokio::test]
async fn preserves_admin_when_not_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .subject("idp|root")
        .name("Old Name")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            subject: "idp|root".to_string(),
            name: "New Name".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.name, "New Name");
    assert!(user.admin);

    Ok(())
}

/// Tests granting admin through an explicit upsert.
///
/// Expected: Ok with admin set on the existing user
#[tokio::test]
async fn grants_admin_when_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::user::UserFactory::new(db)
        .subject("idp|bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            subject: "idp|bob".to_string(),
            name: "Bob".to_string(),
            is_admin: Some(true),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert!(user.admin);
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}
