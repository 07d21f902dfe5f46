use sea_orm_migration::prelude::*;

mod m20260806_000001_create_users;
mod m20260806_000002_create_listings;
mod m20260806_000003_create_inquiries;
mod m20260806_000004_create_visits;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260806_000001_create_users::Migration),
            Box::new(m20260806_000002_create_listings::Migration),
            Box::new(m20260806_000003_create_inquiries::Migration),
            Box::new(m20260806_000004_create_visits::Migration),
        ]
    }
}
