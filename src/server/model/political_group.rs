//! Political group domain model and parameter types.

use crate::model::political_group::{PoliticalGroupDto, PoliticalGroupPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct PoliticalGroup {
    pub id: i32,
    pub name: String,
    pub leader: Option<String>,
    pub affiliation: Option<String>,
    pub allies: Option<String>,
    pub enemies: Option<String>,
    pub description: Option<String>,
}

impl PoliticalGroup {
    pub fn from_entity(entity: entity::political_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            leader: entity.leader,
            affiliation: entity.affiliation,
            allies: entity.allies,
            enemies: entity.enemies,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> PoliticalGroupDto {
        PoliticalGroupDto {
            id: self.id,
            name: self.name,
            leader: self.leader,
            affiliation: self.affiliation,
            allies: self.allies,
            enemies: self.enemies,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PoliticalGroupParam {
    pub name: String,
    pub leader: Option<String>,
    pub affiliation: Option<String>,
    pub allies: Option<String>,
    pub enemies: Option<String>,
    pub description: Option<String>,
}

impl PoliticalGroupParam {
    pub fn from_dto(dto: PoliticalGroupPayloadDto) -> Self {
        Self {
            name: dto.name,
            leader: dto.leader,
            affiliation: dto.affiliation,
            allies: dto.allies,
            enemies: dto.enemies,
            description: dto.description,
        }
    }
}
