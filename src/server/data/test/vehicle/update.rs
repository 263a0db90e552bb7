use super::*;

/// Tests overwriting a vehicle, including clearing its planet.
///
/// Expected: Ok(Some(Vehicle)) with planet_id None
#[tokio::test]
async fn overwrites_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .planet_id(planet.id)
        .build()
        .await?;

    let updated = VehicleRepository::new(db)
        .update(
            vehicle.id,
            VehicleParam {
                name: "AT-AT".to_string(),
                manufacturer: Some("Kuat Drive Yards".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "AT-AT");
    assert_eq!(updated.manufacturer.as_deref(), Some("Kuat Drive Yards"));
    assert!(updated.planet_id.is_none());

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleRepository::new(db)
        .update(11, VehicleParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
