use super::*;

/// Tests adding the same favorite planet twice.
///
/// Verifies that duplicates are kept as separate join rows.
///
/// Expected: two rows with distinct IDs for the same pair
#[tokio::test]
async fn keeps_duplicate_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoritePlanetRepository::new(db);
    let first = repo.create(user.id, planet.id).await?;
    let second = repo.create(user.id, planet.id).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.user_id, user.id);
    assert_eq!(second.planet_id, planet.id);

    Ok(())
}

/// Tests adding a favorite for a planet that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoritePlanetRepository::new(db)
        .create(user.id, 404)
        .await;

    assert!(result.is_err());

    Ok(())
}
