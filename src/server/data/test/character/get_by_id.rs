use super::*;

/// Tests fetching characters by ID.
///
/// Expected: Ok(Some(Character)) for an existing ID, Ok(None) for an unknown one
#[tokio::test]
async fn gets_character_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.name, "Yoda");
    assert!(repo.get_by_id(created.id + 1).await?.is_none());

    Ok(())
}
