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
        character::CharacterDto,
        political_group::{PoliticalGroupDto, PoliticalGroupPayloadDto},
    },
    server::{
        error::AppError,
        model::{
            character::Character,
            political_group::{PoliticalGroup, PoliticalGroupParam},
        },
        service::political_group::PoliticalGroupService,
        state::AppState,
    },
};

/// Tag for grouping political group endpoints in OpenAPI documentation
pub static POLITICAL_GROUP_TAG: &str = "political_group";

/// Get all political groups ordered by ID.
#[utoipa::path(
    get,
    path = "/political_groups",
    tag = POLITICAL_GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved political groups", body = Vec<PoliticalGroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_political_groups(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let groups = PoliticalGroupService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            groups
                .into_iter()
                .map(PoliticalGroup::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new political group.
#[utoipa::path(
    post,
    path = "/political_groups",
    tag = POLITICAL_GROUP_TAG,
    request_body = PoliticalGroupPayloadDto,
    responses(
        (status = 201, description = "Successfully created political group", body = PoliticalGroupDto),
        (status = 400, description = "Invalid political group data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_political_group(
    State(state): State<AppState>,
    payload: Result<Json<PoliticalGroupPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let group = PoliticalGroupService::new(&state.db)
        .create(PoliticalGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Get a political group by ID.
#[utoipa::path(
    get,
    path = "/political_groups/{group_id}",
    tag = POLITICAL_GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Political group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved political group", body = PoliticalGroupDto),
        (status = 404, description = "Political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_political_group(
    State(state): State<AppState>,
    group_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(group_id) = group_id?;

    let group = PoliticalGroupService::new(&state.db)
        .get_by_id(group_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Get the members of a political group.
///
/// Lists every character whose `political_group_id` references the group.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `group_id` - ID of the political group
///
/// # Returns
/// - `200 OK` - Members ordered by ID, possibly empty
/// - `404 Not Found` - Political group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/political_groups/{group_id}/members",
    tag = POLITICAL_GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Political group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<CharacterDto>),
        (status = 404, description = "Political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_political_group_members(
    State(state): State<AppState>,
    group_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(group_id) = group_id?;

    let members = PoliticalGroupService::new(&state.db)
        .get_members(group_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(Character::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Replace a political group.
#[utoipa::path(
    put,
    path = "/political_groups/{group_id}",
    tag = POLITICAL_GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Political group ID")
    ),
    request_body = PoliticalGroupPayloadDto,
    responses(
        (status = 200, description = "Successfully updated political group", body = PoliticalGroupDto),
        (status = 400, description = "Invalid political group data", body = ErrorDto),
        (status = 404, description = "Political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_political_group(
    State(state): State<AppState>,
    group_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PoliticalGroupPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(group_id) = group_id?;
    let Json(payload) = payload?;

    let group = PoliticalGroupService::new(&state.db)
        .update(group_id, PoliticalGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a political group.
///
/// Members are kept and lose their group.
#[utoipa::path(
    delete,
    path = "/political_groups/{group_id}",
    tag = POLITICAL_GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Political group ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted political group", body = MessageDto),
        (status = 404, description = "Political group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_political_group(
    State(state): State<AppState>,
    group_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(group_id) = group_id?;

    PoliticalGroupService::new(&state.db)
        .delete(group_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Political group deleted successfully")),
    ))
}
