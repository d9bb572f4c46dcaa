//! Migration to create the request approval tables.
//!
//! A request approval can involve several employees; the link table carries
//! a per-employee status code.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestApprovals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestApprovals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestApprovals::TenantId).uuid().not_null())
                    .col(ColumnDef::new(RequestApprovals::Name).text().not_null())
                    .col(
                        ColumnDef::new(RequestApprovals::Status)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(RequestApprovals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RequestApprovals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_approvals_tenant_id")
                            .from(RequestApprovals::Table, RequestApprovals::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestApprovalEmployee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestApprovalEmployee::RequestApprovalId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestApprovalEmployee::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestApprovalEmployee::Status)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestApprovalEmployee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(RequestApprovalEmployee::RequestApprovalId)
                            .col(RequestApprovalEmployee::EmployeeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_approval_employee_request")
                            .from(
                                RequestApprovalEmployee::Table,
                                RequestApprovalEmployee::RequestApprovalId,
                            )
                            .to(RequestApprovals::Table, RequestApprovals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_approval_employee_employee")
                            .from(
                                RequestApprovalEmployee::Table,
                                RequestApprovalEmployee::EmployeeId,
                            )
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RequestApprovalEmployee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RequestApprovals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RequestApprovals {
    Table,
    Id,
    TenantId,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RequestApprovalEmployee {
    Table,
    RequestApprovalId,
    EmployeeId,
    Status,
    CreatedAt,
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
