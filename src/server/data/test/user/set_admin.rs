use super::*;

/// Tests granting and revoking admin.
///
/// Expected: Ok(true) for each change, with the flag reflected on lookup
#[tokio::test]
async fn toggles_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);
    assert!(repo.set_admin(user.id, true).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    assert!(repo.set_admin(user.id, false).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}

/// Tests changing admin on a user that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.set_admin(404, true).await?);

    Ok(())
}
