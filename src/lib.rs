//! Holonet: a JSON API over Star Wars characters, planets, vehicles, political groups,
//! and the users who favorite them.
//!
//! - `model` - Request and response DTOs shared by every endpoint
//! - `server` - Axum application, services, and SeaORM data access

pub mod model;
pub mod server;
