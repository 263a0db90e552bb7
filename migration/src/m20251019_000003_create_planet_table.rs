use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 250))
                    .col(string_len_null(Planet::Description, 500))
                    .col(double_null(Planet::Diameter))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(string_len_null(Planet::TerrainType, 250))
                    .col(string_len_null(Planet::Atmosphere, 250))
                    .col(big_integer_null(Planet::Population))
                    .col(string_len_null(Planet::Climate, 250))
                    .col(
                        timestamp_with_time_zone(Planet::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Planet::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    #[sea_orm(iden = "planets")]
    Table,
    Id,
    Name,
    Description,
    Diameter,
    OrbitalPeriod,
    TerrainType,
    Atmosphere,
    Population,
    Climate,
    CreatedAt,
    UpdatedAt,
}
