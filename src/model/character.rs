use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub special_ability: Option<String>,
    pub affiliation: Option<String>,
    pub favorite_weapon: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub political_group_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating or replacing a character.
///
/// Only `name` is required; omitted fields are stored as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CharacterPayloadDto {
    pub name: String,
    pub description: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub special_ability: Option<String>,
    pub affiliation: Option<String>,
    pub favorite_weapon: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub political_group_id: Option<i32>,
}
