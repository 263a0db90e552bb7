//! Planet data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::planet::{Planet, PlanetParam};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet with `created_at` set to the current time.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: PlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            diameter: ActiveValue::Set(param.diameter),
            orbital_period: ActiveValue::Set(param.orbital_period),
            terrain_type: ActiveValue::Set(param.terrain_type),
            atmosphere: ActiveValue::Set(param.atmosphere),
            population: ActiveValue::Set(param.population),
            climate: ActiveValue::Set(param.climate),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets every planet whose ID is in `ids`, in no particular order.
    ///
    /// Used to resolve the planets of a list of vehicles in a single query.
    /// IDs that do not exist are skipped.
    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Planet>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets all planets ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Overwrites every field of a planet and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - The updated planet
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: PlanetParam) -> Result<Option<Planet>, DbErr> {
        let Some(planet) = entity::prelude::Planet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::planet::ActiveModel = planet.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.diameter = ActiveValue::Set(param.diameter);
        active_model.orbital_period = ActiveValue::Set(param.orbital_period);
        active_model.terrain_type = ActiveValue::Set(param.terrain_type);
        active_model.atmosphere = ActiveValue::Set(param.atmosphere);
        active_model.population = ActiveValue::Set(param.population);
        active_model.climate = ActiveValue::Set(param.climate);
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Planet::from_entity(entity)))
    }

    /// Deletes a planet.
    ///
    /// Vehicles on the planet keep existing with `planet_id` set to NULL; favorite
    /// rows referencing it are removed by CASCADE.
    ///
    /// # Returns
    /// - `Ok(true)` - Planet deleted
    /// - `Ok(false)` - No planet with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Planet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
