//! Tests for the people endpoints.

use holonet::{
    model::character::CharacterPayloadDto,
    server::controller::character::{create_person, delete_person, get_person, update_person},
};

use super::*;

/// Tests creating a character assigned to an existing political group.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn creates_person_in_existing_group() -> Result<(), TestError> {
    let state = test_state().await?;
    let group = factory::create_political_group(&state.db).await?;

    let payload = CharacterPayloadDto {
        name: "Leia Organa".to_string(),
        political_group_id: Some(group.id),
        ..Default::default()
    };
    let result = create_person(State(state), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a character that references a missing political group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn create_person_with_unknown_group_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let payload = CharacterPayloadDto {
        name: "Leia Organa".to_string(),
        political_group_id: Some(42),
        ..Default::default()
    };
    let result = create_person(State(state), Ok(Json(payload))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests fetching an existing character.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn gets_existing_person() -> Result<(), TestError> {
    let state = test_state().await?;
    let character = factory::create_character(&state.db).await?;

    let result = get_person(State(state), Ok(Path(character.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating a character that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_unknown_person_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let payload = CharacterPayloadDto {
        name: "Han Solo".to_string(),
        ..Default::default()
    };
    let result = update_person(State(state), Ok(Path(7)), Ok(Json(payload))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting an existing character.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn deletes_existing_person() -> Result<(), TestError> {
    let state = test_state().await?;
    let character = factory::create_character(&state.db).await?;

    let result = delete_person(State(state), Ok(Path(character.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
