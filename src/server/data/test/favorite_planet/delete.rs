use super::*;

/// Tests deleting one of two duplicate join rows.
///
/// Expected: Ok(true) and the remaining row is still found
#[tokio::test]
async fn deletes_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let first = factory::create_favorite_planet(db, user.id, planet.id).await?;
    let second = factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoritePlanetRepository::new(db);

    assert!(repo.delete(first.id).await?);
    assert!(!repo.delete(first.id).await?);

    let remaining = repo.find_first(user.id, planet.id).await?.unwrap();
    assert_eq!(remaining.id, second.id);

    Ok(())
}
