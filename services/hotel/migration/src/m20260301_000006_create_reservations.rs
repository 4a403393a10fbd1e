use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::FirstName).string())
                    .col(ColumnDef::new(Reservations::LastName).string())
                    .col(ColumnDef::new(Reservations::Email).string())
                    .col(ColumnDef::new(Reservations::Phone).string())
                    .col(ColumnDef::new(Reservations::CheckIn).date().not_null())
                    .col(ColumnDef::new(Reservations::CheckOut).date().not_null())
                    .col(ColumnDef::new(Reservations::RoomType).string().not_null())
                    .col(ColumnDef::new(Reservations::Guests).integer().not_null())
                    .col(ColumnDef::new(Reservations::SpecialRequests).text())
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Reservations::ChamberId).uuid())
                    .col(ColumnDef::new(Reservations::ChamberNumber).string())
                    .col(ColumnDef::new(Reservations::UserId).uuid())
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reservations::Table, Reservations::ChamberId)
                            .to(RoomChambers::Table, RoomChambers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reservations::Table, Reservations::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Reservations::Table)
                    .col(Reservations::UserId)
                    .name("idx_reservations_user_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReservationHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReservationHistory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReservationHistory::ReservationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReservationHistory::FieldChanged)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReservationHistory::OldValue).string())
                    .col(ColumnDef::new(ReservationHistory::NewValue).string())
                    .col(
                        ColumnDef::new(ReservationHistory::ChangedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReservationHistory::ChangedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReservationHistory::Table, ReservationHistory::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    RoomType,
    Guests,
    SpecialRequests,
    Status,
    ChamberId,
    ChamberNumber,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ReservationHistory {
    Table,
    Id,
    ReservationId,
    FieldChanged,
    OldValue,
    NewValue,
    ChangedBy,
    ChangedAt,
}

#[derive(Iden)]
enum RoomChambers {
    Table,
    Id,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}
