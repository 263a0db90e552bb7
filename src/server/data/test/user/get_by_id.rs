use super::*;

/// Tests fetching an existing user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn gets_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let fetched = UserRepository::new(db).get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.joined_date, created.joined_date);

    Ok(())
}

/// Tests fetching a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).get_by_id(42).await?.is_none());

    Ok(())
}
