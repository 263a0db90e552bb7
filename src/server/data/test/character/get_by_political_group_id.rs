use super::*;

/// Tests listing the members of a political group.
///
/// Verifies that only characters in the requested group are returned, in ID order.
///
/// Expected: Ok(Vec<Character>) with the 2 members
#[tokio::test]
async fn lists_group_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rebels = factory::create_political_group(db).await?;
    let empire = factory::create_political_group(db).await?;

    let leia = factory::character::CharacterFactory::new(db)
        .political_group_id(rebels.id)
        .build()
        .await?;
    factory::character::CharacterFactory::new(db)
        .political_group_id(empire.id)
        .build()
        .await?;
    let han = factory::character::CharacterFactory::new(db)
        .political_group_id(rebels.id)
        .build()
        .await?;
    factory::create_character(db).await?;

    let members = CharacterRepository::new(db)
        .get_by_political_group_id(rebels.id)
        .await?;

    let ids: Vec<i32> = members.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![leia.id, han.id]);

    Ok(())
}

/// Tests listing members of a group nobody belongs to.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_group_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_political_group(db).await?;
    factory::create_character(db).await?;

    let members = CharacterRepository::new(db)
        .get_by_political_group_id(group.id)
        .await?;

    assert!(members.is_empty());

    Ok(())
}
