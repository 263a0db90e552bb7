//! Tests for the favorite endpoints.

use holonet::{
    model::favorite::UserIdQuery,
    server::controller::favorite::{
        add_favorite_person, add_favorite_planet, get_user_favorites, remove_favorite_person,
        remove_favorite_planet,
    },
};

use super::*;

/// Tests favoriting an existing planet.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let planet = factory::create_planet(&state.db).await?;

    let result = add_favorite_planet(
        State(state),
        Ok(Path(planet.id)),
        Ok(Query(UserIdQuery { user_id: user.id })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests favoriting a planet for an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn add_favorite_planet_for_unknown_user_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;
    let planet = factory::create_planet(&state.db).await?;

    let result = add_favorite_planet(
        State(state),
        Ok(Path(planet.id)),
        Ok(Query(UserIdQuery { user_id: 99 })),
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests favoriting an unknown character.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn add_unknown_favorite_person_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;

    let result = add_favorite_person(
        State(state),
        Ok(Path(99)),
        Ok(Query(UserIdQuery { user_id: user.id })),
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests removing a planet favorite that was never added.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn remove_missing_favorite_planet_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let planet = factory::create_planet(&state.db).await?;

    let result = remove_favorite_planet(
        State(state),
        Ok(Path(planet.id)),
        Ok(Query(UserIdQuery { user_id: user.id })),
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests removing an existing character favorite.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn removes_favorite_person() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let character = factory::create_character(&state.db).await?;
    factory::create_favorite_character(&state.db, user.id, character.id).await?;

    let result = remove_favorite_person(
        State(state),
        Ok(Path(character.id)),
        Ok(Query(UserIdQuery { user_id: user.id })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing favorites of an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn favorites_of_unknown_user_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = get_user_favorites(State(state), Ok(Query(UserIdQuery { user_id: 1 }))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
