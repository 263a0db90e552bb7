use super::*;

/// Tests creating a character with descriptive fields.
///
/// Expected: Ok(Character) with the given fields and no `updated_at`
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = CharacterRepository::new(db)
        .create(CharacterParam {
            name: "Luke Skywalker".to_string(),
            species: Some("Human".to_string()),
            homeworld: Some("Tatooine".to_string()),
            eye_color: Some("blue".to_string()),
            birth_year: Some("19BBY".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(character.id > 0);
    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.species.as_deref(), Some("Human"));
    assert_eq!(character.birth_year.as_deref(), Some("19BBY"));
    assert!(character.gender.is_none());
    assert!(character.political_group_id.is_none());
    assert!(character.updated_at.is_none());

    Ok(())
}

/// Tests creating a character that belongs to a political group.
///
/// Expected: Ok(Character) with `political_group_id` set
#[tokio::test]
async fn creates_character_in_political_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_political_group(db).await?;

    let character = CharacterRepository::new(db)
        .create(CharacterParam {
            name: "Mon Mothma".to_string(),
            political_group_id: Some(group.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(character.political_group_id, Some(group.id));

    Ok(())
}
