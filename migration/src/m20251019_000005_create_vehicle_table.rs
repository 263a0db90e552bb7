use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251019_000003_create_planet_table::Planet,
    m20251019_000004_create_character_table::Character,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 250))
                    .col(string_len_null(Vehicle::Type, 100))
                    .col(string_len_null(Vehicle::Manufacturer, 250))
                    .col(integer_null(Vehicle::CrewCapacity))
                    .col(string_len_null(Vehicle::Weaponry, 500))
                    .col(string_len_null(Vehicle::Model, 250))
                    .col(integer_null(Vehicle::PlanetId))
                    .col(integer_null(Vehicle::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_planet_id")
                            .from(Vehicle::Table, Vehicle::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_character_id")
                            .from(Vehicle::Table, Vehicle::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Name,
    Type,
    Manufacturer,
    CrewCapacity,
    Weaponry,
    Model,
    PlanetId,
    CharacterId,
}
