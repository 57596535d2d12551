use super::*;

/// Tests batch lookup of display names.
///
/// Duplicate and unknown ids are passed in; only known users come back.
///
/// Expected: Ok with one entry per known user
#[tokio::test]
async fn returns_names_for_known_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::user::UserFactory::new(db)
        .name("Alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let names = repo
        .get_display_names(&[alice.id, bob.id, alice.id, 9999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&alice.id).map(String::as_str), Some("Alice"));
    assert_eq!(names.get(&bob.id).map(String::as_str), Some("Bob"));

    Ok(())
}

/// Tests batch lookup with no ids.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_display_names(&[]).await?.is_empty());

    Ok(())
}
