//! Character service for business logic.
//!
//! Characters are served under `/people`. Besides plain CRUD this service makes sure
//! a character only ever references a political group that exists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, political_group::PoliticalGroupRepository},
    error::AppError,
    model::character::{Character, CharacterParam},
};

/// Service providing business logic for characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character
    /// - `Err(AppError::NotFound)` - `political_group_id` references no group
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CharacterParam) -> Result<Character, AppError> {
        self.ensure_political_group(param.political_group_id).await?;

        let character = CharacterRepository::new(self.db).create(param).await?;

        tracing::info!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }

    /// Gets a character by ID.
    ///
    /// # Returns
    /// - `Ok(Character)` - Character found
    /// - `Err(AppError::NotFound)` - No character with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }

    /// Gets all characters ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }

    /// Overwrites a character.
    ///
    /// The character is looked up before the group so a missing character wins.
    ///
    /// # Returns
    /// - `Ok(Character)` - The updated character
    /// - `Err(AppError::NotFound)` - No such character, or no such political group
    pub async fn update(&self, id: i32, param: CharacterParam) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        if character_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        self.ensure_political_group(param.political_group_id).await?;

        let character = character_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        tracing::info!("Updated character {}", character.id);

        Ok(character)
    }

    /// Deletes a character.
    ///
    /// # Returns
    /// - `Ok(())` - Character deleted; its vehicles lose their pilot
    /// - `Err(AppError::NotFound)` - No character with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CharacterRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        tracing::info!("Deleted character {}", id);

        Ok(())
    }

    async fn ensure_political_group(&self, political_group_id: Option<i32>) -> Result<(), AppError> {
        let Some(group_id) = political_group_id else {
            return Ok(());
        };

        if PoliticalGroupRepository::new(self.db)
            .get_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Political group not found".to_string()));
        }

        Ok(())
    }
}
