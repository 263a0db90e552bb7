//! Vehicle domain model and parameter types.

use crate::{
    model::vehicle::{VehicleDto, VehiclePayloadDto},
    server::model::{character::Character, planet::Planet},
};

/// A vehicle row with its relations still given by foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub vehicle_type: Option<String>,
    pub manufacturer: Option<String>,
    pub crew_capacity: Option<i32>,
    pub weaponry: Option<String>,
    pub model: Option<String>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            vehicle_type: entity.vehicle_type,
            manufacturer: entity.manufacturer,
            crew_capacity: entity.crew_capacity,
            weaponry: entity.weaponry,
            model: entity.model,
            planet_id: entity.planet_id,
            character_id: entity.character_id,
        }
    }

    /// Converts the vehicle to a DTO with its relations embedded.
    ///
    /// # Arguments
    /// - `planet` - The planet referenced by `planet_id`, if it resolved
    /// - `character` - The character referenced by `character_id`, if it resolved
    pub fn into_dto(self, planet: Option<Planet>, character: Option<Character>) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            vehicle_type: self.vehicle_type,
            manufacturer: self.manufacturer,
            crew_capacity: self.crew_capacity,
            weaponry: self.weaponry,
            model: self.model,
            planet: planet.map(Planet::into_dto),
            character: character.map(Character::into_dto),
        }
    }
}

/// Parameters for creating or fully replacing a vehicle.
#[derive(Debug, Clone, Default)]
pub struct VehicleParam {
    pub name: String,
    pub vehicle_type: Option<String>,
    pub manufacturer: Option<String>,
    pub crew_capacity: Option<i32>,
    pub weaponry: Option<String>,
    pub model: Option<String>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl VehicleParam {
    pub fn from_dto(dto: VehiclePayloadDto) -> Self {
        Self {
            name: dto.name,
            vehicle_type: dto.vehicle_type,
            manufacturer: dto.manufacturer,
            crew_capacity: dto.crew_capacity,
            weaponry: dto.weaponry,
            model: dto.model,
            planet_id: dto.planet_id,
            character_id: dto.character_id,
        }
    }
}
