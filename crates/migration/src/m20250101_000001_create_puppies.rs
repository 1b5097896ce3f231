//! Create `puppies` table.
//!
//! One row per shelter puppy; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Puppies::Table)
                    .if_not_exists()
                    .col(pk_auto(Puppies::Id))
                    .col(string_len(Puppies::Name, 50))
                    .col(string_len_null(Puppies::Breed, 20))
                    .col(integer_null(Puppies::AgeEstimate))
                    .col(integer_null(Puppies::CurrentKennelNumber))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Puppies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Puppies {
    Table,
    Id,
    Name,
    Breed,
    AgeEstimate,
    CurrentKennelNumber,
}
