//! Tests for the planet endpoints.

use holonet::{
    model::planet::PlanetPayloadDto,
    server::controller::planet::{create_planet, delete_planet, get_planet, update_planet},
};

use super::*;

/// Tests creating a planet with only the required name.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn creates_planet_with_name_only() -> Result<(), TestError> {
    let state = test_state().await?;

    let payload = PlanetPayloadDto {
        name: "Hoth".to_string(),
        ..Default::default()
    };
    let result = create_planet(State(state), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests fetching a planet that was never created.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_unknown_planet_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = get_planet(State(state), Ok(Path(999))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests replacing an existing planet.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn updates_existing_planet() -> Result<(), TestError> {
    let state = test_state().await?;
    let planet = factory::create_planet(&state.db).await?;

    let payload = PlanetPayloadDto {
        name: "Dagobah".to_string(),
        climate: Some("murky".to_string()),
        ..Default::default()
    };
    let result = update_planet(State(state), Ok(Path(planet.id)), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests replacing a planet that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_unknown_planet_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let payload = PlanetPayloadDto {
        name: "Dagobah".to_string(),
        ..Default::default()
    };
    let result = update_planet(State(state), Ok(Path(999)), Ok(Json(payload))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting twice reports the second attempt as not found.
///
/// Expected: Ok then Err(AppError::NotFound)
#[tokio::test]
async fn delete_twice_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;
    let planet = factory::create_planet(&state.db).await?;

    let first = delete_planet(State(state.clone()), Ok(Path(planet.id))).await;
    assert!(first.is_ok());

    let second = delete_planet(State(state), Ok(Path(planet.id))).await;
    assert!(matches!(second, Err(AppError::NotFound(_))));

    Ok(())
}
