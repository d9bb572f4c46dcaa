//! Migration to create the organization structure tables.
//!
//! Positions, departments, employment types, and teams share the same shape:
//! an organization-scoped named record that employees can be attached to.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for unit in UNITS {
            manager.create_table(create_unit_table(unit)).await?;

            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{}_organization_id", unit.table_name))
                        .table(unit.table)
                        .col(OrgUnit::OrganizationId)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for unit in UNITS.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(format!("idx_{}_organization_id", unit.table_name))
                        .to_owned(),
                )
                .await?;

            manager
                .drop_table(Table::drop().table(unit.table).to_owned())
                .await?;
        }

        Ok(())
    }
}

struct Unit {
    table: OrgStructure,
    table_name: &'static str,
}

const UNITS: &[Unit] = &[
    Unit {
        table: OrgStructure::OrganizationPositions,
        table_name: "organization_positions",
    },
    Unit {
        table: OrgStructure::OrganizationDepartments,
        table_name: "organization_departments",
    },
    Unit {
        table: OrgStructure::OrganizationEmploymentTypes,
        table_name: "organization_employment_types",
    },
    Unit {
        table: OrgStructure::OrganizationTeams,
        table_name: "organization_teams",
    },
];

fn create_unit_table(unit: &Unit) -> TableCreateStatement {
    Table::create()
        .table(unit.table)
        .if_not_exists()
        .col(ColumnDef::new(OrgUnit::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(OrgUnit::TenantId).uuid().not_null())
        .col(ColumnDef::new(OrgUnit::OrganizationId).uuid().not_null())
        .col(ColumnDef::new(OrgUnit::Name).text().not_null())
        .col(
            ColumnDef::new(OrgUnit::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(OrgUnit::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_tenant_id", unit.table_name))
                .from(unit.table, OrgUnit::TenantId)
                .to(Tenants::Table, Tenants::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_organization_id", unit.table_name))
                .from(unit.table, OrgUnit::OrganizationId)
                .to(Organizations::Table, Organizations::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
enum OrgStructure {
    OrganizationPositions,
    OrganizationDepartments,
    OrganizationEmploymentTypes,
    OrganizationTeams,
}

#[derive(DeriveIden)]
enum OrgUnit {
    Id,
    TenantId,
    OrganizationId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}
