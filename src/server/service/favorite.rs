//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService`, which reads a user's favorites across
//! both join tables and adds or removes favorite planets and characters. Every
//! operation checks the user first, then the target record.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{FavoritesDto, UserFavoritesDto},
    server::{
        data::{
            character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            character::Character,
            favorite::{FavoriteCharacter, FavoritePlanet},
            planet::Planet,
            user::User,
        },
    },
};

/// Service providing business logic for user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user together with their favorite characters and planets.
    ///
    /// Both lists follow the order in which the favorites were added; a favorite
    /// added twice appears twice.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - The user and both favorite lists
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, AppError> {
        let user = self.get_user(user_id).await?;

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            user: user.into_dto(),
            favorites: FavoritesDto {
                characters: characters.into_iter().map(Character::into_dto).collect(),
                planets: planets.into_iter().map(Planet::into_dto).collect(),
            },
        })
    }

    /// Marks a planet as a favorite of a user.
    ///
    /// A new join row is created even if the pair already exists.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanet)` - The created join row
    /// - `Err(AppError::NotFound)` - User or planet does not exist
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<FavoritePlanet, AppError> {
        self.get_user(user_id).await?;
        self.get_planet(planet_id).await?;

        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;

        tracing::debug!("User {} added favorite planet {}", user_id, planet_id);

        Ok(favorite)
    }

    /// Removes the oldest favorite row for a user and planet.
    ///
    /// # Returns
    /// - `Ok(())` - One join row removed
    /// - `Err(AppError::NotFound)` - User, planet, or favorite does not exist
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), AppError> {
        self.get_user(user_id).await?;
        self.get_planet(planet_id).await?;

        let favorite_repo = FavoritePlanetRepository::new(self.db);
        let favorite = favorite_repo
            .find_first(user_id, planet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite planet not found".to_string()))?;

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!("User {} removed favorite planet {}", user_id, planet_id);

        Ok(())
    }

    /// Marks a character as a favorite of a user.
    ///
    /// A new join row is created even if the pair already exists.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacter)` - The created join row
    /// - `Err(AppError::NotFound)` - User or character does not exist
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacter, AppError> {
        self.get_user(user_id).await?;
        self.get_character(character_id).await?;

        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await?;

        tracing::debug!("User {} added favorite character {}", user_id, character_id);

        Ok(favorite)
    }

    /// Removes the oldest favorite row for a user and character.
    ///
    /// # Returns
    /// - `Ok(())` - One join row removed
    /// - `Err(AppError::NotFound)` - User, character, or favorite does not exist
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<(), AppError> {
        self.get_user(user_id).await?;
        self.get_character(character_id).await?;

        let favorite_repo = FavoriteCharacterRepository::new(self.db);
        let favorite = favorite_repo
            .find_first(user_id, character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite character not found".to_string()))?;

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!("User {} removed favorite character {}", user_id, character_id);

        Ok(())
    }

    async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn get_planet(&self, planet_id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    async fn get_character(&self, character_id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }
}
