//! Favorite planet data repository.
//!
//! Manages the `favorite_planets` join table linking users to planets. A user
//! may favorite the same planet more than once; every row is kept and listed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{favorite::FavoritePlanet, planet::Planet};

/// Repository providing database operations for favorite planet rows.
pub struct FavoritePlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoritePlanetRepository<'a> {
    /// Creates a new FavoritePlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a join row, even if the same pair is already present.
    ///
    /// # Arguments
    /// - `user_id` - ID of an existing user
    /// - `planet_id` - ID of an existing planet
    ///
    /// # Returns
    /// - `Ok(FavoritePlanet)` - The created join row
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, user_id: i32, planet_id: i32) -> Result<FavoritePlanet, DbErr> {
        let entity = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FavoritePlanet::from_entity(entity))
    }

    /// Finds the oldest join row for a user and planet pair.
    ///
    /// # Returns
    /// - `Ok(Some(FavoritePlanet))` - Row with the lowest ID for the pair
    /// - `Ok(None)` - The user has not favorited the planet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_first(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<FavoritePlanet>, DbErr> {
        let entity = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(FavoritePlanet::from_entity))
    }

    /// Gets the planets a user has favorited, in the order they were favorited.
    ///
    /// Joins `planets` onto `favorite_planets`, so a planet favorited twice
    /// appears twice.
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .join(
                JoinType::InnerJoin,
                entity::planet::Relation::FavoritePlanet.def(),
            )
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Deletes a single join row by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoritePlanet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
