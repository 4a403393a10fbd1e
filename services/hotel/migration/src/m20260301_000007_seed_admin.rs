use sea_orm_migration::prelude::*;

/// Bootstrap administrator. Without it nobody could log in to create the
/// first real accounts.
#[derive(DeriveMigrationName)]
pub struct Migration;

const ADMIN_ID: &str = "0195a0c0-0000-7000-8000-000000000001";
const ADMIN_CODE: &str = "9999999";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Profiles::Table)
            .columns([Profiles::Id, Profiles::Name, Profiles::Role, Profiles::Code])
            .values_panic([
                Expr::val(ADMIN_ID).cast_as(Alias::new("uuid")),
                "Admin".into(),
                "admin".into(),
                ADMIN_CODE.into(),
            ])
            .on_conflict(OnConflict::column(Profiles::Code).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Profiles::Table)
            .and_where(Expr::col(Profiles::Code).eq(ADMIN_CODE))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Name,
    Role,
    Code,
}
