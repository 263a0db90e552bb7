//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Vehicles are created without a planet or pilot unless `planet_id` or
/// `character_id` is set; the referenced rows must already exist.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vehicle_type: Option<String>,
    planet_id: Option<i32>,
    character_id: Option<i32>,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"`
    /// - vehicle_type: `None`
    /// - planet_id, character_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            vehicle_type: None,
            planet_id: None,
            character_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    pub fn character_id(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            vehicle_type: ActiveValue::Set(self.vehicle_type),
            manufacturer: ActiveValue::Set(None),
            crew_capacity: ActiveValue::Set(None),
            weaponry: ActiveValue::Set(None),
            model: ActiveValue::Set(None),
            planet_id: ActiveValue::Set(self.planet_id),
            character_id: ActiveValue::Set(self.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values and no relations.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
