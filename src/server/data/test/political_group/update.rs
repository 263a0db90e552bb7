use super::*;

/// Tests overwriting a political group.
///
/// Expected: Ok(Some(PoliticalGroup)) with previous optional fields cleared
#[tokio::test]
async fn overwrites_political_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::political_group::PoliticalGroupFactory::new(db)
        .leader("Palpatine")
        .build()
        .await?;

    let updated = PoliticalGroupRepository::new(db)
        .update(
            group.id,
            PoliticalGroupParam {
                name: "First Order".to_string(),
                description: Some("Successor to the Empire".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "First Order");
    assert!(updated.leader.is_none());
    assert_eq!(updated.description.as_deref(), Some("Successor to the Empire"));

    Ok(())
}

/// Tests updating a political group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PoliticalGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PoliticalGroupRepository::new(db)
        .update(3, PoliticalGroupParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
