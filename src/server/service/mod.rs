//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence checks**: Turning missing records into `AppError::NotFound`
//! - **Relationship resolution**: Validating and embedding related records
//! - **Credential handling**: Hashing passwords before they reach the database

pub mod character;
pub mod favorite;
pub mod planet;
pub mod political_group;
pub mod user;
pub mod vehicle;
