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
        planet::{PlanetDto, PlanetPayloadDto},
    },
    server::{
        error::AppError,
        model::planet::{Planet, PlanetParam},
        service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get all planets.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of planets ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(planets.into_iter().map(Planet::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a new planet.
///
/// Only `name` is required; every other field may be omitted or null.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Planet data
///
/// # Returns
/// - `201 Created` - Successfully created planet
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = PlanetPayloadDto,
    responses(
        (status = 201, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<PlanetPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let planet = PlanetService::new(&state.db)
        .create(PlanetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

/// Get a planet by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - ID of the planet
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - Planet not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = planet_id?;

    let planet = PlanetService::new(&state.db).get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Replace a planet.
///
/// Every field is overwritten; optional fields missing from the body become null.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - ID of the planet to replace
/// - `payload` - Complete new planet data
///
/// # Returns
/// - `200 OK` - Successfully updated planet
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `404 Not Found` - Planet not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = PlanetPayloadDto,
    responses(
        (status = 200, description = "Successfully updated planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PlanetPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = planet_id?;
    let Json(payload) = payload?;

    let planet = PlanetService::new(&state.db)
        .update(planet_id, PlanetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// Vehicles on the planet are kept without a planet; favorites of it are removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - ID of the planet to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted planet
/// - `404 Not Found` - Planet not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = planet_id?;

    PlanetService::new(&state.db).delete(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet deleted successfully")),
    ))
}
