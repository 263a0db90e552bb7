use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PoliticalGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(PoliticalGroup::Id))
                    .col(string_len(PoliticalGroup::Name, 250))
                    .col(string_len_null(PoliticalGroup::Leader, 250))
                    .col(string_len_null(PoliticalGroup::Affiliation, 250))
                    .col(string_len_null(PoliticalGroup::Allies, 250))
                    .col(string_len_null(PoliticalGroup::Enemies, 250))
                    .col(string_len_null(PoliticalGroup::Description, 500))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PoliticalGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PoliticalGroup {
    #[sea_orm(iden = "political_groups")]
    Table,
    Id,
    Name,
    Leader,
    Affiliation,
    Allies,
    Enemies,
    Description,
}
