//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::create_planet(&db).await?;
//! let favorite = factory::create_favorite_planet(&db, user.id, planet.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let vehicle = factory::vehicle::VehicleFactory::new(&db)
//!     .name("Millennium Falcon")
//!     .planet_id(planet.id)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod political_group;
pub mod user;
pub mod vehicle;

pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet};
pub use planet::create_planet;
pub use political_group::create_political_group;
pub use user::create_user;
pub use vehicle::create_vehicle;
