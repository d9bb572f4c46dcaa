//! Migration to create the tags and skills tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name) in LABEL_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(*table)
                        .if_not_exists()
                        .col(ColumnDef::new(Label::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Label::TenantId).uuid().not_null())
                        .col(ColumnDef::new(Label::Name).text().not_null())
                        .col(
                            ColumnDef::new(Label::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Label::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{}_tenant_id", name))
                                .from(*table, Label::TenantId)
                                .to(Tenants::Table, Tenants::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // Tag and skill names are unique within a tenant
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{}_tenant_name", name))
                        .table(*table)
                        .col(Label::TenantId)
                        .col(Label::Name)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name) in LABEL_TABLES.iter().rev() {
            manager
                .drop_index(Index::drop().name(format!("idx_{}_tenant_name", name)).to_owned())
                .await?;

            manager
                .drop_table(Table::drop().table(*table).to_owned())
                .await?;
        }

        Ok(())
    }
}

const LABEL_TABLES: &[(LabelTable, &str)] =
    &[(LabelTable::Tags, "tags"), (LabelTable::Skills, "skills")];

#[derive(DeriveIden, Clone, Copy)]
enum LabelTable {
    Tags,
    Skills,
}

#[derive(DeriveIden)]
enum Label {
    Id,
    TenantId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
