//! Database migrations.

pub use sea_orm_migration::*;

mod m20250312_000001_create_organization_table;
mod m20250312_000002_create_release_table;
mod m20250312_000003_create_file_table;
mod m20250312_000004_create_distribution_table;
mod m20250312_000005_create_release_file_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_000001_create_organization_table::Migration),
            Box::new(m20250312_000002_create_release_table::Migration),
            Box::new(m20250312_000003_create_file_table::Migration),
            Box::new(m20250312_000004_create_distribution_table::Migration),
            Box::new(m20250312_000005_create_release_file_table::Migration),
        ]
    }
}
