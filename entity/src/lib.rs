//! SeaORM entity definitions for the Holonet schema.
//!
//! One module per table. Relations mirror the foreign keys created by the
//! `migration` crate so `Schema::create_table_from_entity` produces the same
//! referential actions in test databases.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod political_group;
pub mod user;
pub mod vehicle;
