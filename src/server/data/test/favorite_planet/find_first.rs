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
    let planet = factory::create_planet(db).await?;

    let first = factory::create_favorite_planet(db, user.id, planet.id).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoritePlanetRepository::new(db);

    let found = repo.find_first(user.id, planet.id).await?.unwrap();
    assert_eq!(found.id, first.id);
    assert!(repo.find_first(other_user.id, planet.id).await?.is_none());

    Ok(())
}
