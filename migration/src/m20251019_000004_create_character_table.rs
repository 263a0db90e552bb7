use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000002_create_political_group_table::PoliticalGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 250))
                    .col(string_len_null(Character::Description, 500))
                    .col(string_len_null(Character::Species, 250))
                    .col(string_len_null(Character::Homeworld, 250))
                    .col(string_len_null(Character::SpecialAbility, 250))
                    .col(string_len_null(Character::Affiliation, 250))
                    .col(string_len_null(Character::FavoriteWeapon, 250))
                    .col(string_len_null(Character::EyeColor, 250))
                    .col(string_len_null(Character::HairColor, 250))
                    .col(string_len_null(Character::BirthYear, 250))
                    .col(string_len_null(Character::Gender, 6))
                    .col(integer_null(Character::PoliticalGroupId))
                    .col(
                        timestamp_with_time_zone(Character::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Character::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_political_group_id")
                            .from(Character::Table, Character::PoliticalGroupId)
                            .to(PoliticalGroup::Table, PoliticalGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    Id,
    Name,
    Description,
    Species,
    Homeworld,
    SpecialAbility,
    Affiliation,
    FavoriteWeapon,
    EyeColor,
    HairColor,
    BirthYear,
    Gender,
    PoliticalGroupId,
    CreatedAt,
    UpdatedAt,
}
