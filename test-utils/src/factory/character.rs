//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    species: Option<String>,
    political_group_id: Option<i32>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - species: `None`
    /// - political_group_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            species: None,
            political_group_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Makes the character a member of the given political group.
    pub fn political_group_id(mut self, political_group_id: i32) -> Self {
        self.political_group_id = Some(political_group_id);
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            species: ActiveValue::Set(self.species),
            homeworld: ActiveValue::Set(None),
            special_ability: ActiveValue::Set(None),
            affiliation: ActiveValue::Set(None),
            favorite_weapon: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            hair_color: ActiveValue::Set(None),
            birth_year: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            political_group_id: ActiveValue::Set(self.political_group_id),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
