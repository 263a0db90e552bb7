use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::vehicle::{Vehicle, VehicleParam};

/// Repository providing database operations for vehicles.
///
/// Returns vehicles with their relations as raw foreign keys; resolving them into
/// planets and characters is left to the service layer.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: VehicleParam) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            vehicle_type: ActiveValue::Set(param.vehicle_type),
            manufacturer: ActiveValue::Set(param.manufacturer),
            crew_capacity: ActiveValue::Set(param.crew_capacity),
            weaponry: ActiveValue::Set(param.weaponry),
            model: ActiveValue::Set(param.model),
            planet_id: ActiveValue::Set(param.planet_id),
            character_id: ActiveValue::Set(param.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Gets all vehicles ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Overwrites every field of a vehicle, returning `None` if it doesn't exist.
    pub async fn update(&self, id: i32, param: VehicleParam) -> Result<Option<Vehicle>, DbErr> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.vehicle_type = ActiveValue::Set(param.vehicle_type);
        active_model.manufacturer = ActiveValue::Set(param.manufacturer);
        active_model.crew_capacity = ActiveValue::Set(param.crew_capacity);
        active_model.weaponry = ActiveValue::Set(param.weaponry);
        active_model.model = ActiveValue::Set(param.model);
        active_model.planet_id = ActiveValue::Set(param.planet_id);
        active_model.character_id = ActiveValue::Set(param.character_id);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Vehicle::from_entity(entity)))
    }

    /// Deletes a vehicle, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
