use super::*;

/// Tests listing a user's favorite characters.
///
/// Verifies join-row order, duplicate entries, and that other users' favorites
/// are excluded.
///
/// Expected: Ok(Vec<Character>) of [yoda, luke, yoda]
#[tokio::test]
async fn lists_favorites_in_join_order_with_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let luke = factory::create_character(db).await?;
    let yoda = factory::create_character(db).await?;

    factory::create_favorite_character(db, user.id, yoda.id).await?;
    factory::create_favorite_character(db, other_user.id, luke.id).await?;
    factory::create_favorite_character(db, user.id, luke.id).await?;
    factory::create_favorite_character(db, user.id, yoda.id).await?;

    let favorites = FavoriteCharacterRepository::new(db)
        .get_characters_by_user_id(user.id)
        .await?;

    let ids: Vec<i32> = favorites.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![yoda.id, luke.id, yoda.id]);

    Ok(())
}

/// Tests listing favorites for a user with none.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_character(db).await?;

    let favorites = FavoriteCharacterRepository::new(db)
        .get_characters_by_user_id(user.id)
        .await?;

    assert!(favorites.is_empty());

    Ok(())
}
