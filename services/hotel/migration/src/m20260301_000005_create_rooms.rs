use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Rooms::RoomType)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Description).text().not_null())
                    .col(ColumnDef::new(Rooms::Guests).integer().not_null())
                    .col(ColumnDef::new(Rooms::SizeM2).integer().not_null())
                    .col(ColumnDef::new(Rooms::Beds).string().not_null())
                    .col(ColumnDef::new(Rooms::PricePerNight).double().not_null())
                    .col(
                        ColumnDef::new(Rooms::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Rooms::Amenities).json_binary().not_null())
                    .col(ColumnDef::new(Rooms::Features).json_binary().not_null())
                    .col(
                        ColumnDef::new(Rooms::CancellationPolicy)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rooms::ImageUrls).json_binary().not_null())
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoomChambers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomChambers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomChambers::ChamberNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RoomChambers::RoomType).string().not_null())
                    .col(
                        ColumnDef::new(RoomChambers::Status)
                            .string()
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(RoomChambers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomChambers::Table, RoomChambers::RoomType)
                            .to(Rooms::Table, Rooms::RoomType)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(RoomChambers::Table)
                    .col(RoomChambers::RoomType)
                    .col(RoomChambers::Status)
                    .name("idx_room_chambers_type_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomChambers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    RoomType,
    Description,
    Guests,
    SizeM2,
    Beds,
    PricePerNight,
    Rating,
    Amenities,
    Features,
    CancellationPolicy,
    ImageUrls,
    CreatedAt,
}

#[derive(Iden)]
enum RoomChambers {
    Table,
    Id,
    ChamberNumber,
    RoomType,
    Status,
    CreatedAt,
}
