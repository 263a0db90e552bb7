//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/docs`, and the root path lists every documented endpoint.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        self,
        character::PEOPLE_TAG,
        favorite::FAVORITE_TAG,
        planet::PLANET_TAG,
        political_group::POLITICAL_GROUP_TAG,
        sitemap::{build_sitemap, get_sitemap, DOCS_PATH},
        user::USER_TAG,
        vehicle::VEHICLE_TAG,
    },
    state::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so utoipa merges their operations
/// into one OpenAPI path item.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every endpoint below
/// - `GET, POST /users` and `GET, PUT, DELETE /users/{user_id}`
/// - `GET /users/favorites?user_id=X`
/// - `GET, POST /people` and `GET, PUT, DELETE /people/{people_id}`
/// - `GET, POST /planets` and `GET, PUT, DELETE /planets/{planet_id}`
/// - `GET, POST /political_groups` and `GET, PUT, DELETE /political_groups/{group_id}`
/// - `GET /political_groups/{group_id}/members`
/// - `GET, POST /vehicles` and `GET, PUT, DELETE /vehicles/{vehicle_id}`
/// - `POST, DELETE /favorite/planet/{planet_id}?user_id=X`
/// - `POST, DELETE /favorite/people/{people_id}?user_id=X`
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/docs/openapi.json`; Swagger UI is served
/// at `/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive state and middleware layers.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holonet", description = "Star Wars data API"),
        tags(
            (name = USER_TAG, description = "User management API routes"),
            (name = PEOPLE_TAG, description = "Character API routes"),
            (name = PLANET_TAG, description = "Planet API routes"),
            (name = POLITICAL_GROUP_TAG, description = "Political group API routes"),
            (name = VEHICLE_TAG, description = "Vehicle API routes"),
            (name = FAVORITE_TAG, description = "User favorites API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::character::get_people,
            controller::character::create_person
        ))
        .routes(routes!(
            controller::character::get_person,
            controller::character::update_person,
            controller::character::delete_person
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::political_group::get_political_groups,
            controller::political_group::create_political_group
        ))
        .routes(routes!(
            controller::political_group::get_political_group,
            controller::political_group::update_political_group,
            controller::political_group::delete_political_group
        ))
        .routes(routes!(
            controller::political_group::get_political_group_members
        ))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    let sitemap = build_sitemap(&api);

    routes
        .route("/", get(move || get_sitemap(sitemap.clone())))
        .merge(SwaggerUi::new(DOCS_PATH).url("/docs/openapi.json", api))
}
