pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_profiles;
mod m20260301_000002_create_employees;
mod m20260301_000003_create_tasks;
mod m20260301_000004_create_stock_items;
mod m20260301_000005_create_rooms;
mod m20260301_000006_create_reservations;
mod m20260301_000007_seed_admin;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_profiles::Migration),
            Box::new(m20260301_000002_create_employees::Migration),
            Box::new(m20260301_000003_create_tasks::Migration),
            Box::new(m20260301_000004_create_stock_items::Migration),
            Box::new(m20260301_000005_create_rooms::Migration),
            Box::new(m20260301_000006_create_reservations::Migration),
            Box::new(m20260301_000007_seed_admin::Migration),
        ]
    }
}
