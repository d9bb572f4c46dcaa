//! Migration to create the employee join tables.
//!
//! These realize the many-to-many edges of the employee record: tags,
//! skills, departments, employment types, and team membership. Join rows
//! disappear with either side of the relationship.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for join in JOINS {
            manager
                .create_table(
                    Table::create()
                        .table(join.table)
                        .if_not_exists()
                        .col(ColumnDef::new(join.left_column).uuid().not_null())
                        .col(ColumnDef::new(JoinColumns::EmployeeId).uuid().not_null())
                        .col(
                            ColumnDef::new(JoinColumns::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .primary_key(
                            Index::create()
                                .col(join.left_column)
                                .col(JoinColumns::EmployeeId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{}_left", join.table_name))
                                .from(join.table, join.left_column)
                                .to(join.left_table, JoinColumns::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{}_employee_id", join.table_name))
                                .from(join.table, JoinColumns::EmployeeId)
                                .to(Employee::Table, Employee::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for join in JOINS.iter().rev() {
            manager
                .drop_table(Table::drop().table(join.table).to_owned())
                .await?;
        }

        Ok(())
    }
}

struct Join {
    table: JoinTable,
    table_name: &'static str,
    left_column: LeftColumn,
    left_table: LeftTable,
}

const JOINS: &[Join] = &[
    Join {
        table: JoinTable::TagEmployee,
        table_name: "tag_employee",
        left_column: LeftColumn::TagId,
        left_table: LeftTable::Tags,
    },
    Join {
        table: JoinTable::SkillEmployee,
        table_name: "skill_employee",
        left_column: LeftColumn::SkillId,
        left_table: LeftTable::Skills,
    },
    Join {
        table: JoinTable::OrganizationDepartmentEmployee,
        table_name: "organization_department_employee",
        left_column: LeftColumn::OrganizationDepartmentId,
        left_table: LeftTable::OrganizationDepartments,
    },
    Join {
        table: JoinTable::OrganizationEmploymentTypeEmployee,
        table_name: "organization_employment_type_employee",
        left_column: LeftColumn::OrganizationEmploymentTypeId,
        left_table: LeftTable::OrganizationEmploymentTypes,
    },
    Join {
        table: JoinTable::OrganizationTeamEmployee,
        table_name: "organization_team_employee",
        left_column: LeftColumn::OrganizationTeamId,
        left_table: LeftTable::OrganizationTeams,
    },
];

#[derive(DeriveIden, Clone, Copy)]
enum JoinTable {
    TagEmployee,
    SkillEmployee,
    OrganizationDepartmentEmployee,
    OrganizationEmploymentTypeEmployee,
    OrganizationTeamEmployee,
}

#[derive(DeriveIden, Clone, Copy)]
enum LeftColumn {
    TagId,
    SkillId,
    OrganizationDepartmentId,
    OrganizationEmploymentTypeId,
    OrganizationTeamId,
}

#[derive(DeriveIden, Clone, Copy)]
enum LeftTable {
    Tags,
    Skills,
    OrganizationDepartments,
    OrganizationEmploymentTypes,
    OrganizationTeams,
}

#[derive(DeriveIden)]
enum JoinColumns {
    Id,
    EmployeeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
