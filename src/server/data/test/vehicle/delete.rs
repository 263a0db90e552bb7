use super::*;

/// Tests deleting a vehicle.
///
/// Expected: Ok(true), then the vehicle is gone and a second delete returns Ok(false)
#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    assert!(repo.delete(vehicle.id).await?);
    assert!(repo.get_by_id(vehicle.id).await?.is_none());
    assert!(!repo.delete(vehicle.id).await?);

    Ok(())
}
