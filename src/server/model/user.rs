//! User domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::user::{UserDto, UserPayloadDto};

/// A user as read from the database, without the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub is_active: bool,
    pub joined_date: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// The password column is dropped here so it can never be serialized.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            is_active: entity.is_active,
            joined_date: entity.joined_date,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_active: self.is_active,
            joined_date: self.joined_date,
        }
    }
}

/// Parameters for creating or replacing a user.
///
/// `password` holds the plaintext from the request until the service layer swaps
/// it for an Argon2 hash; repositories only ever receive the hash.
#[derive(Debug, Clone)]
pub struct UserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl UserParam {
    pub fn from_dto(dto: UserPayloadDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            is_active: dto.is_active,
        }
    }
}
