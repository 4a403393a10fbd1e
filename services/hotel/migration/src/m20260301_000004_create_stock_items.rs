use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockItems::Name).string().not_null())
                    .col(ColumnDef::new(StockItems::Category).string().not_null())
                    .col(
                        ColumnDef::new(StockItems::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(StockItems::Price).double().not_null())
                    .col(ColumnDef::new(StockItems::Unit).string().not_null())
                    .col(ColumnDef::new(StockItems::Description).text())
                    .col(
                        ColumnDef::new(StockItems::LastRestocked)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(StockItems::Table)
                    .col(StockItems::Category)
                    .name("idx_stock_items_category")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StockItems {
    Table,
    Id,
    Name,
    Category,
    Quantity,
    Price,
    Unit,
    Description,
    LastRestocked,
    CreatedAt,
}
