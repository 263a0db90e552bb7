use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::political_group::{PoliticalGroup, PoliticalGroupParam};

pub struct PoliticalGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PoliticalGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new political group
    pub async fn create(&self, param: PoliticalGroupParam) -> Result<PoliticalGroup, DbErr> {
        let entity = entity::political_group::ActiveModel {
            name: ActiveValue::Set(param.name),
            leader: ActiveValue::Set(param.leader),
            affiliation: ActiveValue::Set(param.affiliation),
            allies: ActiveValue::Set(param.allies),
            enemies: ActiveValue::Set(param.enemies),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PoliticalGroup::from_entity(entity))
    }

    /// Gets a political group by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PoliticalGroup>, DbErr> {
        let entity = entity::prelude::PoliticalGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PoliticalGroup::from_entity))
    }

    /// Gets all political groups ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PoliticalGroup>, DbErr> {
        let entities = entity::prelude::PoliticalGroup::find()
            .order_by_asc(entity::political_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PoliticalGroup::from_entity)
            .collect())
    }

    /// Overwrites every field of a political group, returning `None` if it doesn't exist
    pub async fn update(
        &self,
        id: i32,
        param: PoliticalGroupParam,
    ) -> Result<Option<PoliticalGroup>, DbErr> {
        let Some(group) = entity::prelude::PoliticalGroup::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::political_group::ActiveModel = group.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.leader = ActiveValue::Set(param.leader);
        active_model.affiliation = ActiveValue::Set(param.affiliation);
        active_model.allies = ActiveValue::Set(param.allies);
        active_model.enemies = ActiveValue::Set(param.enemies);
        active_model.description = ActiveValue::Set(param.description);

        let entity = active_model.update(self.db).await?;

        Ok(Some(PoliticalGroup::from_entity(entity)))
    }

    /// Deletes a political group; members keep existing with no group
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PoliticalGroup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
