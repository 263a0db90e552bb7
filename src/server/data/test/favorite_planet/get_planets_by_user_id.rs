use super::*;

/// Tests listing a user's favorite planets.
///
/// Verifies join-row order, duplicate entries, and that other users' favorites
/// are excluded.
///
/// Expected: Ok(Vec<Planet>) of [hoth, tatooine, hoth]
#[tokio::test]
async fn lists_favorites_in_join_order_with_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let tatooine = factory::create_planet(db).await?;
    let hoth = factory::create_planet(db).await?;

    factory::create_favorite_planet(db, user.id, hoth.id).await?;
    factory::create_favorite_planet(db, other_user.id, tatooine.id).await?;
    factory::create_favorite_planet(db, user.id, tatooine.id).await?;
    factory::create_favorite_planet(db, user.id, hoth.id).await?;

    let favorites = FavoritePlanetRepository::new(db)
        .get_planets_by_user_id(user.id)
        .await?;

    let ids: Vec<i32> = favorites.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![hoth.id, tatooine.id, hoth.id]);

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
    factory::create_planet(db).await?;

    let favorites = FavoritePlanetRepository::new(db)
        .get_planets_by_user_id(user.id)
        .await?;

    assert!(favorites.is_empty());

    Ok(())
}
