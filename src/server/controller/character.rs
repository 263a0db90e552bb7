//! Handlers for characters, served under `/people`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CharacterDto, CharacterPayloadDto},
    },
    server::{
        error::AppError,
        model::character::{Character, CharacterParam},
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// Get all characters ordered by ID.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            characters
                .into_iter()
                .map(Character::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new character.
///
/// # Returns
/// - `201 Created` - Successfully created character
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `404 Not Found` - `political_group_id` references no political group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CharacterPayloadDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 404, description = "Political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CharacterPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let character = CharacterService::new(&state.db)
        .create(CharacterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Get a character by ID.
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(people_id) = people_id?;

    let character = CharacterService::new(&state.db).get_by_id(people_id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Replace a character.
///
/// # Returns
/// - `200 OK` - Successfully updated character
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `404 Not Found` - Character or political group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    request_body = CharacterPayloadDto,
    responses(
        (status = 200, description = "Successfully updated character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 404, description = "Character or political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CharacterPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(people_id) = people_id?;
    let Json(payload) = payload?;

    let character = CharacterService::new(&state.db)
        .update(people_id, CharacterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(people_id) = people_id?;

    CharacterService::new(&state.db).delete(people_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Character deleted successfully")),
    ))
}
