//! Create the booleans table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booleans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Booleans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Booleans::Key).string().not_null())
                    .col(ColumnDef::new(Booleans::Value).boolean().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booleans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booleans {
    Table,
    Id,
    Key,
    Value,
}
