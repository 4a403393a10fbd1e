use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(hotelier_hotel_migration::Migrator).await;
}
