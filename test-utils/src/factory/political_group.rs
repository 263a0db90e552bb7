//! Political group factory for creating test political group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test political groups with customizable fields.
pub struct PoliticalGroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    leader: Option<String>,
    affiliation: Option<String>,
}

impl<'a> PoliticalGroupFactory<'a> {
    /// Creates a new PoliticalGroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Political Group {id}"`
    /// - leader, affiliation: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Political Group {}", id),
            leader: None,
            affiliation: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }

    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    /// Builds and inserts the political group entity into the database.
    pub async fn build(self) -> Result<entity::political_group::Model, DbErr> {
        entity::political_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            leader: ActiveValue::Set(self.leader),
            affiliation: ActiveValue::Set(self.affiliation),
            allies: ActiveValue::Set(None),
            enemies: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a political group with default values.
pub async fn create_political_group(
    db: &DatabaseConnection,
) -> Result<entity::political_group::Model, DbErr> {
    PoliticalGroupFactory::new(db).build().await
}
