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
        vehicle::{VehicleDto, VehiclePayloadDto},
    },
    server::{
        error::AppError, model::vehicle::VehicleParam, service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Get all vehicles.
///
/// Each vehicle embeds its planet and pilot, or `null` when it has none.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of vehicles ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Create a new vehicle.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Vehicle data; `planet_id` and `character_id` must exist when set
///
/// # Returns
/// - `201 Created` - Successfully created vehicle with relations embedded
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `404 Not Found` - Referenced planet or character not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = VehiclePayloadDto,
    responses(
        (status = 201, description = "Successfully created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 404, description = "Planet or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehiclePayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let vehicle = VehicleService::new(&state.db)
        .create(VehicleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Get a vehicle by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `vehicle_id` - ID of the vehicle
///
/// # Returns
/// - `200 OK` - The vehicle with relations embedded
/// - `404 Not Found` - Vehicle not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    vehicle_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(vehicle_id) = vehicle_id?;

    let vehicle = VehicleService::new(&state.db).get_by_id(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Replace a vehicle.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `vehicle_id` - ID of the vehicle to replace
/// - `payload` - Complete new vehicle data
///
/// # Returns
/// - `200 OK` - Successfully updated vehicle
/// - `400 Bad Request` - Missing name or wrongly typed field
/// - `404 Not Found` - Vehicle, planet, or character not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = VehiclePayloadDto,
    responses(
        (status = 200, description = "Successfully updated vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 404, description = "Vehicle, planet or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    vehicle_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<VehiclePayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(vehicle_id) = vehicle_id?;
    let Json(payload) = payload?;

    let vehicle = VehicleService::new(&state.db)
        .update(vehicle_id, VehicleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Delete a vehicle.
#[utoipa::path(
    delete,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted vehicle", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    vehicle_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(vehicle_id) = vehicle_id?;

    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Vehicle deleted successfully")),
    ))
}
