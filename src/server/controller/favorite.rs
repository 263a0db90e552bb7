//! Handlers for user favorites.
//!
//! The acting user is always given by the `user_id` query parameter. Lookups check
//! the user first, so an unknown user is reported even when the target is unknown too.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCharacterDto, FavoritePlanetDto, UserIdQuery},
        user::UserFavoritesDto,
    },
    server::{error::AppError, service::favorite::FavoriteService, state::AppState},
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Get a user's favorites.
///
/// Returns the user with their favorite characters and planets in the order they
/// were added. A favorite added twice is listed twice.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Query string carrying `user_id`
///
/// # Returns
/// - `200 OK` - The user and their favorites
/// - `400 Bad Request` - `user_id` missing or not an integer
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = UserFavoritesDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(query.user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a favorite planet.
///
/// Adding the same planet again creates another favorite entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - ID of the planet to favorite
/// - `query` - Query string carrying `user_id`
///
/// # Returns
/// - `201 Created` - The created favorite entry
/// - `400 Bad Request` - `user_id` missing or not an integer
/// - `404 Not Found` - User or planet not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Successfully added favorite planet", body = FavoritePlanetDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = planet_id?;
    let Query(query) = query?;

    let favorite = FavoriteService::new(&state.db)
        .add_planet(query.user_id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

/// Remove a favorite planet.
///
/// Removes one favorite entry for the pair, the oldest if there are several.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - ID of the favorited planet
/// - `query` - Query string carrying `user_id`
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `400 Bad Request` - `user_id` missing or not an integer
/// - `404 Not Found` - User, planet, or favorite not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Successfully removed favorite planet", body = MessageDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User, planet or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = planet_id?;
    let Query(query) = query?;

    FavoriteService::new(&state.db)
        .remove_planet(query.user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite planet removed successfully")),
    ))
}

/// Add a favorite character.
///
/// Adding the same character again creates another favorite entry.
///
/// # Returns
/// - `201 Created` - The created favorite entry
/// - `400 Bad Request` - `user_id` missing or not an integer
/// - `404 Not Found` - User or character not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Successfully added favorite character", body = FavoriteCharacterDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(people_id) = people_id?;
    let Query(query) = query?;

    let favorite = FavoriteService::new(&state.db)
        .add_character(query.user_id, people_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

/// Remove a favorite character.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `400 Bad Request` - `user_id` missing or not an integer
/// - `404 Not Found` - User, character, or favorite not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Successfully removed favorite character", body = MessageDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User, character or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(people_id) = people_id?;
    let Query(query) = query?;

    FavoriteService::new(&state.db)
        .remove_character(query.user_id, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite character removed successfully")),
    ))
}
