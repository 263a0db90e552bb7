//! Tests for the political group endpoints.

use holonet::{
    model::political_group::PoliticalGroupPayloadDto,
    server::controller::political_group::{
        create_political_group, delete_political_group, get_political_group,
        get_political_group_members,
    },
};
use test_utils::factory::character::CharacterFactory;

use super::*;

/// Tests creating a political group.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn creates_political_group() -> Result<(), TestError> {
    let state = test_state().await?;

    let payload = PoliticalGroupPayloadDto {
        name: "Galactic Empire".to_string(),
        leader: Some("Palpatine".to_string()),
        ..Default::default()
    };
    let result = create_political_group(State(state), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests fetching an unknown political group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_unknown_group_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = get_political_group(State(state), Ok(Path(3))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing the members of a group with characters assigned.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_group_members() -> Result<(), TestError> {
    let state = test_state().await?;
    let group = factory::create_political_group(&state.db).await?;
    CharacterFactory::new(&state.db)
        .political_group_id(group.id)
        .build()
        .await?;

    let result = get_political_group_members(State(state), Ok(Path(group.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing the members of an unknown group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn members_of_unknown_group_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = get_political_group_members(State(state), Ok(Path(3))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting an unknown political group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_unknown_group_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = delete_political_group(State(state), Ok(Path(3))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
