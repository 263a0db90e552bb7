//! Domain models and operation parameters used on the server.
//!
//! Repositories convert entity models into these types at the data layer boundary,
//! so entity models never reach the service or controller layers. Each domain model
//! converts into its API DTO with `into_dto`, and each parameter type is built from
//! its request payload with `from_dto`.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod political_group;
pub mod user;
pub mod vehicle;
