//! Planet domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::planet::{PlanetDto, PlanetPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub diameter: Option<f64>,
    pub orbital_period: Option<i32>,
    pub terrain_type: Option<String>,
    pub atmosphere: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            diameter: entity.diameter,
            orbital_period: entity.orbital_period,
            terrain_type: entity.terrain_type,
            atmosphere: entity.atmosphere,
            population: entity.population,
            climate: entity.climate,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            description: self.description,
            diameter: self.diameter,
            orbital_period: self.orbital_period,
            terrain_type: self.terrain_type,
            atmosphere: self.atmosphere,
            population: self.population,
            climate: self.climate,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating or fully replacing a planet.
#[derive(Debug, Clone, Default)]
pub struct PlanetParam {
    pub name: String,
    pub description: Option<String>,
    pub diameter: Option<f64>,
    pub orbital_period: Option<i32>,
    pub terrain_type: Option<String>,
    pub atmosphere: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
}

impl PlanetParam {
    pub fn from_dto(dto: PlanetPayloadDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            diameter: dto.diameter,
            orbital_period: dto.orbital_period,
            terrain_type: dto.terrain_type,
            atmosphere: dto.atmosphere,
            population: dto.population,
            climate: dto.climate,
        }
    }
}
