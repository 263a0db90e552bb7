//! Data transfer objects shared by the HTTP API.
//!
//! Every type in this module is part of the public JSON contract: request payloads
//! deserialize into the `*PayloadDto` types, responses serialize from the `*Dto`
//! types. Server-side code converts its domain models into these at the edge.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod political_group;
pub mod user;
pub mod vehicle;
