//! Character data repository for database operations.
//!
//! Characters are exposed over the API as "people". This repository also answers
//! membership queries for political groups.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::character::{Character, CharacterParam};

/// Repository providing database operations for characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character with `created_at` set to the current time.
    ///
    /// # Arguments
    /// - `param` - Character fields; `political_group_id` must reference an existing group
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CharacterParam) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            species: ActiveValue::Set(param.species),
            homeworld: ActiveValue::Set(param.homeworld),
            special_ability: ActiveValue::Set(param.special_ability),
            affiliation: ActiveValue::Set(param.affiliation),
            favorite_weapon: ActiveValue::Set(param.favorite_weapon),
            eye_color: ActiveValue::Set(param.eye_color),
            hair_color: ActiveValue::Set(param.hair_color),
            birth_year: ActiveValue::Set(param.birth_year),
            gender: ActiveValue::Set(param.gender),
            political_group_id: ActiveValue::Set(param.political_group_id),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Finds a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets every character whose ID is in `ids`.
    ///
    /// Used to resolve the pilots of a list of vehicles in a single query.
    /// IDs that do not exist are skipped.
    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Character>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Gets all characters ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Gets the members of a political group ordered by ID.
    ///
    /// # Arguments
    /// - `political_group_id` - ID of the group; an unknown ID yields an empty list
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Characters whose `political_group_id` matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_political_group_id(
        &self,
        political_group_id: i32,
    ) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::PoliticalGroupId.eq(political_group_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Overwrites every field of a character and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The updated character
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: CharacterParam) -> Result<Option<Character>, DbErr> {
        let Some(character) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::character::ActiveModel = character.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.species = ActiveValue::Set(param.species);
        active_model.homeworld = ActiveValue::Set(param.homeworld);
        active_model.special_ability = ActiveValue::Set(param.special_ability);
        active_model.affiliation = ActiveValue::Set(param.affiliation);
        active_model.favorite_weapon = ActiveValue::Set(param.favorite_weapon);
        active_model.eye_color = ActiveValue::Set(param.eye_color);
        active_model.hair_color = ActiveValue::Set(param.hair_color);
        active_model.birth_year = ActiveValue::Set(param.birth_year);
        active_model.gender = ActiveValue::Set(param.gender);
        active_model.political_group_id = ActiveValue::Set(param.political_group_id);
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Character::from_entity(entity)))
    }

    /// Deletes a character.
    ///
    /// Vehicles piloted by the character get `character_id` set to NULL; favorite
    /// rows referencing it are removed by CASCADE.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
