use crate::server::data::favorite_planet::FavoritePlanetRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_first;
mod get_planets_by_user_id;
