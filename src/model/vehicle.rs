use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// A vehicle with its planet and pilot embedded.
///
/// `planet` and `character` are `null` when the vehicle has no such relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub manufacturer: Option<String>,
    pub crew_capacity: Option<i32>,
    pub weaponry: Option<String>,
    pub model: Option<String>,
    pub planet: Option<PlanetDto>,
    pub character: Option<CharacterDto>,
}

/// Request body for creating or replacing a vehicle.
///
/// Relations are given by id; both must reference existing records when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VehiclePayloadDto {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub manufacturer: Option<String>,
    pub crew_capacity: Option<i32>,
    pub weaponry: Option<String>,
    pub model: Option<String>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}
