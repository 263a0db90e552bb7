//! HTTP request handlers.
//!
//! Each submodule holds the handlers for one resource. Handlers extract path, query,
//! and body input, convert DTOs into parameter models, call the matching service, and
//! convert the result back into a DTO. Every handler carries a `#[utoipa::path]`
//! annotation so the router can assemble the OpenAPI document and the sitemap.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod political_group;
pub mod sitemap;
pub mod user;
pub mod vehicle;
