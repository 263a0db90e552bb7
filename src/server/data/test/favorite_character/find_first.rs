use super::*;

/// Tests finding the oldest join row for a pair.
///
/// Expected: Ok(Some) with the lowest ID, Ok(None) for a pair without rows
#[tokio::test]
async fn finds_oldest_row_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let first = factory::create_favorite_character(db, user.id, character.id).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;

    let repo = FavoriteCharacterRepository::new(db);

    let found = repo.find_first(user.id, character.id).await?.unwrap();
    assert_eq!(found.id, first.id);
    assert!(repo.find_first(other_user.id, character.id).await?.is_none());

    Ok(())
}
