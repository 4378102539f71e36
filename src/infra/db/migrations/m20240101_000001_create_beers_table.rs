//! Migration: Create beers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Beers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Beers::Name)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Beers::Brand).string_len(200).not_null())
                    .col(ColumnDef::new(Beers::Max).integer().not_null())
                    .col(ColumnDef::new(Beers::Quantity).integer().not_null())
                    .col(ColumnDef::new(Beers::Type).string_len(32).not_null())
                    // Stock bounds enforced by the database as well
                    .check(
                        Expr::col(Beers::Quantity)
                            .gte(0)
                            .and(Expr::col(Beers::Quantity).lte(Expr::col(Beers::Max))),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Beers {
    Table,
    Id,
    Name,
    Brand,
    Max,
    Quantity,
    Type,
}
