use crate::server::{data::character::CharacterRepository, model::character::CharacterParam};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_by_political_group_id;
