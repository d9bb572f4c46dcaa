//! Migration to create the employee table.
//!
//! An employee wraps exactly one user account and belongs to exactly one
//! organization; both references are required and deleting either parent
//! deletes the employee row. Contact and position references are optional
//! and are nulled out when their parent disappears.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employee::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Employee::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Employee::UserId).uuid().not_null())
                    .col(ColumnDef::new(Employee::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Employee::ContactId).uuid().null())
                    .col(
                        ColumnDef::new(Employee::OrganizationPositionId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::ValueDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Employee::ShortDescription)
                            .string_len(200)
                            .null(),
                    )
                    .col(ColumnDef::new(Employee::Description).text().null())
                    .col(
                        ColumnDef::new(Employee::StartedWorkOn)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::EndWork)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Employee::PayPeriod).text().null())
                    .col(ColumnDef::new(Employee::BillRateValue).decimal().null())
                    .col(ColumnDef::new(Employee::BillRateCurrency).text().null())
                    .col(ColumnDef::new(Employee::ReWeeklyLimit).integer().null())
                    .col(
                        ColumnDef::new(Employee::OfferDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::AcceptDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::RejectDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employee::EmployeeLevel)
                            .string_len(500)
                            .null(),
                    )
                    .col(ColumnDef::new(Employee::AnonymousBonus).boolean().null())
                    .col(ColumnDef::new(Employee::AverageIncome).decimal().null())
                    .col(ColumnDef::new(Employee::AverageBonus).decimal().null())
                    .col(ColumnDef::new(Employee::AverageExpenses).decimal().null())
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employee::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_tenant_id")
                            .from(Employee::Table, Employee::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_user_id")
                            .from(Employee::Table, Employee::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_organization_id")
                            .from(Employee::Table, Employee::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_contact_id")
                            .from(Employee::Table, Employee::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_organization_position_id")
                            .from(Employee::Table, Employee::OrganizationPositionId)
                            .to(OrganizationPositions::Table, OrganizationPositions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One employee record per user account
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_user_id")
                    .table(Employee::Table)
                    .col(Employee::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_tenant_id")
                    .table(Employee::Table)
                    .col(Employee::TenantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_tenant_organization")
                    .table(Employee::Table)
                    .col(Employee::TenantId)
                    .col(Employee::OrganizationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_employee_tenant_organization")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_employee_tenant_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_employee_user_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    TenantId,
    UserId,
    OrganizationId,
    ContactId,
    OrganizationPositionId,
    ValueDate,
    IsActive,
    ShortDescription,
    Description,
    StartedWorkOn,
    EndWork,
    PayPeriod,
    BillRateValue,
    BillRateCurrency,
    ReWeeklyLimit,
    OfferDate,
    AcceptDate,
    RejectDate,
    EmployeeLevel,
    AnonymousBonus,
    AverageIncome,
    AverageBonus,
    AverageExpenses,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OrganizationPositions {
    Table,
    Id,
}
