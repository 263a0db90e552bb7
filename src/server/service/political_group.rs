//! Political group service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, political_group::PoliticalGroupRepository},
    error::AppError,
    model::{
        character::Character,
        political_group::{PoliticalGroup, PoliticalGroupParam},
    },
};

pub struct PoliticalGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PoliticalGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PoliticalGroupParam) -> Result<PoliticalGroup, AppError> {
        let group = PoliticalGroupRepository::new(self.db).create(param).await?;

        tracing::info!("Created political group {} ({})", group.id, group.name);

        Ok(group)
    }

    /// Gets a political group by ID.
    ///
    /// # Returns
    /// - `Ok(PoliticalGroup)` - Group found
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<PoliticalGroup, AppError> {
        PoliticalGroupRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Political group not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<PoliticalGroup>, AppError> {
        Ok(PoliticalGroupRepository::new(self.db).get_all().await?)
    }

    /// Lists the characters belonging to a political group.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Members ordered by ID, possibly empty
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_members(&self, id: i32) -> Result<Vec<Character>, AppError> {
        self.get_by_id(id).await?;

        Ok(CharacterRepository::new(self.db)
            .get_by_political_group_id(id)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: PoliticalGroupParam,
    ) -> Result<PoliticalGroup, AppError> {
        let group = PoliticalGroupRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Political group not found".to_string()))?;

        tracing::info!("Updated political group {}", group.id);

        Ok(group)
    }

    /// Deletes a political group; its members remain without a group.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PoliticalGroupRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Political group not found".to_string()));
        }

        tracing::info!("Deleted political group {}", id);

        Ok(())
    }
}
