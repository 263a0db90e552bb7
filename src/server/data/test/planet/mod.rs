use crate::server::{data::planet::PlanetRepository, model::planet::PlanetParam};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;

fn tatooine() -> PlanetParam {
    PlanetParam {
        name: "Tatooine".to_string(),
        description: Some("desert".to_string()),
        diameter: Some(10465.0),
        orbital_period: Some(304),
        terrain_type: Some("desert".to_string()),
        atmosphere: Some("arid".to_string()),
        population: Some(200000),
        climate: Some("hot".to_string()),
    }
}
