use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::political_group::Entity",
        from = "Column::PoliticalGroupId",
        to = "super::political_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PoliticalGroup,
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::political_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoliticalGroup.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
