use super::*;
use sea_orm::{EntityTrait, SqlErr};

/// Tests creating a user.
///
/// Verifies that the fields are stored, `joined_date` is stamped, and the password
/// hash is persisted as given.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(user_param("luke@tatooine.net"))
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.first_name.as_deref(), Some("Luke"));
    assert_eq!(user.last_name.as_deref(), Some("Skywalker"));
    assert_eq!(user.email, "luke@tatooine.net");
    assert!(user.is_active);

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "$argon2id$stub");

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(user_param("leia@alderaan.gov")).await?;

    let result = repo.create(user_param("leia@alderaan.gov")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
