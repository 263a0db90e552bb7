//! Favorite character data repository.
//!
//! Manages the `favorite_characters` join table linking users to characters. A user
//! may favorite the same character more than once; every row is kept and listed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{character::Character, favorite::FavoriteCharacter};

/// Repository providing database operations for favorite character rows.
pub struct FavoriteCharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteCharacterRepository<'a> {
    /// Creates a new FavoriteCharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a join row, even if the same pair is already present.
    ///
    /// # Arguments
    /// - `user_id` - ID of an existing user
    /// - `character_id` - ID of an existing character
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacter)` - The created join row
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, user_id: i32, character_id: i32) -> Result<FavoriteCharacter, DbErr> {
        let entity = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FavoriteCharacter::from_entity(entity))
    }

    /// Finds the oldest join row for a user and character pair.
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteCharacter))` - Row with the lowest ID for the pair
    /// - `Ok(None)` - The user has not favorited the character
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_first(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacter>, DbErr> {
        let entity = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(FavoriteCharacter::from_entity))
    }

    /// Gets the characters a user has favorited, in the order they were favorited.
    ///
    /// Joins `characters` onto `favorite_characters`, so a character favorited twice
    /// appears twice.
    pub async fn get_characters_by_user_id(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .join(
                JoinType::InnerJoin,
                entity::character::Relation::FavoriteCharacter.def(),
            )
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Deletes a single join row by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteCharacter::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
