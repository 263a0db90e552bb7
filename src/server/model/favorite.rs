//! Favorite-join row models.

use crate::model::favorite::{FavoriteCharacterDto, FavoritePlanetDto};

/// A row linking a user to a favorite character.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteCharacter {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl FavoriteCharacter {
    pub fn from_entity(entity: entity::favorite_character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            character_id: entity.character_id,
        }
    }

    pub fn into_dto(self) -> FavoriteCharacterDto {
        FavoriteCharacterDto {
            id: self.id,
            user_id: self.user_id,
            character_id: self.character_id,
        }
    }
}

/// A row linking a user to a favorite planet.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl FavoritePlanet {
    pub fn from_entity(entity: entity::favorite_planet::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
        }
    }

    pub fn into_dto(self) -> FavoritePlanetDto {
        FavoritePlanetDto {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
        }
    }
}
