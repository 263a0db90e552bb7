//! User service for business logic.
//!
//! This module provides the `UserService` for managing users. It hashes passwords
//! before they are stored and turns email collisions into client errors.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{User, UserParam},
    util::password::hash_password,
};

const EMAIL_TAKEN: &str = "Email is already registered";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `param` - User fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already belongs to another user
    /// - `Err(AppError::PasswordHashErr)` - Password could not be hashed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: UserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let param = UserParam {
            password: hash_password(&param.password)?,
            ..param
        };

        let user = user_repo.create(param).await.map_err(email_conflict)?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Replaces a user's fields, re-hashing the given password.
    ///
    /// Keeping the same email is allowed; taking another user's email is not.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Email already belongs to another user
    pub async fn update(&self, id: i32, param: UserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(existing) = user_repo.get_by_email(&param.email).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
            }
        }

        let param = UserParam {
            password: hash_password(&param.password)?,
            ..param
        };

        let user = user_repo
            .update(id, param)
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user along with their favorites.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Maps a unique violation raced past the email pre-check to a client error.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::BadRequest(EMAIL_TAKEN.to_string()),
        _ => AppError::DbErr(err),
    }
}
