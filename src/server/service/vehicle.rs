//! Vehicle service for business logic.
//!
//! This module provides the `VehicleService`, which validates a vehicle's planet and
//! pilot references on write and embeds the referenced records on read. Listing
//! vehicles resolves all planets and pilots with one batched query per relation.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::vehicle::VehicleDto,
    server::{
        data::{
            character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository,
        },
        error::AppError,
        model::{
            character::Character,
            planet::Planet,
            vehicle::{Vehicle, VehicleParam},
        },
    },
};

/// Service providing business logic for vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new VehicleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vehicle and returns it with its relations embedded.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The created vehicle
    /// - `Err(AppError::NotFound)` - `planet_id` or `character_id` references nothing
    pub async fn create(&self, param: VehicleParam) -> Result<VehicleDto, AppError> {
        let (planet, character) = self
            .resolve_relations(param.planet_id, param.character_id)
            .await?;

        let vehicle = VehicleRepository::new(self.db).create(param).await?;

        tracing::info!("Created vehicle {} ({})", vehicle.id, vehicle.name);

        Ok(vehicle.into_dto(planet, character))
    }

    /// Gets a vehicle by ID with its planet and pilot embedded.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - Vehicle found
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<VehicleDto, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let planet = match vehicle.planet_id {
            Some(planet_id) => PlanetRepository::new(self.db).get_by_id(planet_id).await?,
            None => None,
        };
        let character = match vehicle.character_id {
            Some(character_id) => {
                CharacterRepository::new(self.db)
                    .get_by_id(character_id)
                    .await?
            }
            None => None,
        };

        Ok(vehicle.into_dto(planet, character))
    }

    /// Gets all vehicles ordered by ID with their relations embedded.
    pub async fn get_all(&self) -> Result<Vec<VehicleDto>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        let planet_ids = unique_ids(vehicles.iter().filter_map(|v| v.planet_id));
        let character_ids = unique_ids(vehicles.iter().filter_map(|v| v.character_id));

        let planets: HashMap<i32, Planet> = PlanetRepository::new(self.db)
            .get_many_by_ids(planet_ids)
            .await?
            .into_iter()
            .map(|planet| (planet.id, planet))
            .collect();
        let characters: HashMap<i32, Character> = CharacterRepository::new(self.db)
            .get_many_by_ids(character_ids)
            .await?
            .into_iter()
            .map(|character| (character.id, character))
            .collect();

        Ok(vehicles
            .into_iter()
            .map(|vehicle| {
                let planet = vehicle.planet_id.and_then(|id| planets.get(&id).cloned());
                let character = vehicle
                    .character_id
                    .and_then(|id| characters.get(&id).cloned());
                vehicle.into_dto(planet, character)
            })
            .collect())
    }

    /// Overwrites a vehicle.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The updated vehicle
    /// - `Err(AppError::NotFound)` - No such vehicle, or a relation references nothing
    pub async fn update(&self, id: i32, param: VehicleParam) -> Result<VehicleDto, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if vehicle_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        let (planet, character) = self
            .resolve_relations(param.planet_id, param.character_id)
            .await?;

        let vehicle: Vehicle = vehicle_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        tracing::info!("Updated vehicle {}", vehicle.id);

        Ok(vehicle.into_dto(planet, character))
    }

    /// Deletes a vehicle.
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle deleted
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VehicleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        tracing::info!("Deleted vehicle {}", id);

        Ok(())
    }

    /// Loads the planet and pilot a vehicle is about to reference.
    ///
    /// Fails with `NotFound` when an ID is set but no record exists, so a vehicle
    /// never points at a missing row.
    async fn resolve_relations(
        &self,
        planet_id: Option<i32>,
        character_id: Option<i32>,
    ) -> Result<(Option<Planet>, Option<Character>), AppError> {
        let planet = match planet_id {
            Some(planet_id) => Some(
                PlanetRepository::new(self.db)
                    .get_by_id(planet_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?,
            ),
            None => None,
        };

        let character = match character_id {
            Some(character_id) => Some(
                CharacterRepository::new(self.db)
                    .get_by_id(character_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?,
            ),
            None => None,
        };

        Ok((planet, character))
    }
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
