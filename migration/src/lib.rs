//! Database migrations for the workforce data layer.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_06_01_000001_create_tenants;
mod m2025_06_01_000100_create_users;
mod m2025_06_01_000200_create_organizations;
mod m2025_06_01_000300_create_contacts;
mod m2025_06_01_000400_create_organization_structure;
mod m2025_06_01_000500_create_tags_and_skills;
mod m2025_06_02_000100_create_employee;
mod m2025_06_02_000200_create_employee_joins;
mod m2025_06_02_000300_create_time_logs;
mod m2025_06_02_000400_create_invoice_items;
mod m2025_06_02_000500_create_request_approvals;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_01_000001_create_tenants::Migration),
            Box::new(m2025_06_01_000100_create_users::Migration),
            Box::new(m2025_06_01_000200_create_organizations::Migration),
            Box::new(m2025_06_01_000300_create_contacts::Migration),
            Box::new(m2025_06_01_000400_create_organization_structure::Migration),
            Box::new(m2025_06_01_000500_create_tags_and_skills::Migration),
            Box::new(m2025_06_02_000100_create_employee::Migration),
            Box::new(m2025_06_02_000200_create_employee_joins::Migration),
            Box::new(m2025_06_02_000300_create_time_logs::Migration),
            Box::new(m2025_06_02_000400_create_invoice_items::Migration),
            Box::new(m2025_06_02_000500_create_request_approvals::Migration),
        ]
    }
}
