use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
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

/// Request body for creating or replacing a planet.
///
/// Only `name` is required; omitted fields are stored as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanetPayloadDto {
    pub name: String,
    pub description: Option<String>,
    pub diameter: Option<f64>,
    pub orbital_period: Option<i32>,
    pub terrain_type: Option<String>,
    pub atmosphere: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
}
