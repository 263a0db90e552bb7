use super::*;

/// Tests fetching an existing planet.
///
/// Expected: Ok(Some(Planet)) matching the created row
#[tokio::test]
async fn gets_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Planet).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let created = repo.create(tatooine()).await?;

    let fetched = repo.get_by_id(created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Planet).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fetched = PlanetRepository::new(db).get_by_id(999).await?;

    assert!(fetched.is_none());

    Ok(())
}
