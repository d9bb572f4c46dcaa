//! Migration to create the time_logs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TimeLogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TimeLogs::TenantId).uuid().not_null())
                    .col(ColumnDef::new(TimeLogs::EmployeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(TimeLogs::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeLogs::StoppedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TimeLogs::Source)
                            .text()
                            .not_null()
                            .default("BROWSER"),
                    )
                    .col(
                        ColumnDef::new(TimeLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TimeLogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_logs_tenant_id")
                            .from(TimeLogs::Table, TimeLogs::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_logs_employee_id")
                            .from(TimeLogs::Table, TimeLogs::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_logs_employee_id")
                    .table(TimeLogs::Table)
                    .col(TimeLogs::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_time_logs_employee_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TimeLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TimeLogs {
    Table,
    Id,
    TenantId,
    EmployeeId,
    StartedAt,
    StoppedAt,
    Source,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
