use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{Planet, PlanetParam},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;

        tracing::info!("Created planet {} ({})", planet.id, planet.name);

        Ok(planet)
    }

    /// Gets a planet by ID, or `NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    /// Overwrites a planet, or `NotFound` if it doesn't exist
    pub async fn update(&self, id: i32, param: PlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

        tracing::info!("Updated planet {}", planet.id);

        Ok(planet)
    }

    /// Deletes a planet, or `NotFound` if it doesn't exist
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlanetRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        tracing::info!("Deleted planet {}", id);

        Ok(())
    }
}
