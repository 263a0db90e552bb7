//! Character domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::character::{CharacterDto, CharacterPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
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

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            species: entity.species,
            homeworld: entity.homeworld,
            special_ability: entity.special_ability,
            affiliation: entity.affiliation,
            favorite_weapon: entity.favorite_weapon,
            eye_color: entity.eye_color,
            hair_color: entity.hair_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
            political_group_id: entity.political_group_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            description: self.description,
            species: self.species,
            homeworld: self.homeworld,
            special_ability: self.special_ability,
            affiliation: self.affiliation,
            favorite_weapon: self.favorite_weapon,
            eye_color: self.eye_color,
            hair_color: self.hair_color,
            birth_year: self.birth_year,
            gender: self.gender,
            political_group_id: self.political_group_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating or fully replacing a character.
#[derive(Debug, Clone, Default)]
pub struct CharacterParam {
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

impl CharacterParam {
    pub fn from_dto(dto: CharacterPayloadDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            species: dto.species,
            homeworld: dto.homeworld,
            special_ability: dto.special_ability,
            affiliation: dto.affiliation,
            favorite_weapon: dto.favorite_weapon,
            eye_color: dto.eye_color,
            hair_color: dto.hair_color,
            birth_year: dto.birth_year,
            gender: dto.gender,
            political_group_id: dto.political_group_id,
        }
    }
}
