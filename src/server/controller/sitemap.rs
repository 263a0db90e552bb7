//! Sitemap served at the API root.

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::SitemapDto;

/// Path of the Swagger UI, listed in the sitemap next to the documented endpoints.
pub const DOCS_PATH: &str = "/docs";

/// Builds the sitemap from the paths of the generated OpenAPI document.
///
/// Paths keep their `{param}` placeholders and are sorted alphabetically.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut endpoints: Vec<String> = api.paths.paths.keys().cloned().collect();
    endpoints.push(DOCS_PATH.to_string());
    endpoints.sort();

    SitemapDto { endpoints }
}

/// Returns the list of available endpoints.
pub async fn get_sitemap(sitemap: SitemapDto) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap))
}
