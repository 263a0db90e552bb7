//! Tests for the user endpoints.

use holonet::{
    model::user::UserPayloadDto,
    server::controller::user::{create_user, delete_user, get_user, update_user},
};
use test_utils::factory::user::UserFactory;

use super::*;

fn payload(email: &str) -> UserPayloadDto {
    UserPayloadDto {
        first_name: "Luke".to_string(),
        last_name: "Skywalker".to_string(),
        email: email.to_string(),
        password: "tosche-station".to_string(),
        is_active: true,
    }
}

/// Tests registering a new user.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = create_user(State(state), Ok(Json(payload("luke@holonet.test")))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests registering a user with an email that is already taken.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_user_with_taken_email_is_bad_request() -> Result<(), TestError> {
    let state = test_state().await?;
    UserFactory::new(&state.db)
        .email("luke@holonet.test")
        .build()
        .await?;

    let result = create_user(State(state), Ok(Json(payload("luke@holonet.test")))).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests fetching an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_unknown_user_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = get_user(State(state), Ok(Path(5))).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests replacing a user while keeping their own email.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn update_user_keeping_own_email() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = UserFactory::new(&state.db)
        .email("luke@holonet.test")
        .build()
        .await?;

    let result = update_user(
        State(state),
        Ok(Path(user.id)),
        Ok(Json(payload("luke@holonet.test"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests deleting an existing user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn deletes_existing_user() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;

    let result = delete_user(State(state), Ok(Path(user.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
