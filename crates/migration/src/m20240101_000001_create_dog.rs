//! Create `dog` table.
//! Single table, integer id assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dog::Table)
                    .if_not_exists()
                    .col(pk_auto(Dog::Id))
                    .col(string(Dog::Name))
                    .col(text(Dog::Description))
                    .col(integer(Dog::Age))
                    .col(string(Dog::Breed))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dog {
    Table,
    Id,
    Name,
    Description,
    Age,
    Breed,
}
