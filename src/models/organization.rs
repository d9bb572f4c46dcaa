//! Organization entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::Currency;

/// Organization entity; every employee belongs to exactly one organization
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Tenant identifier for multi-tenancy
    pub tenant_id: Uuid,

    pub name: String,

    /// Default currency for the organization
    pub currency: Currency,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_delete = "Cascade"
    )]
    Tenant,

    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,

    #[sea_orm(has_many = "super::organization_department::Entity")]
    Departments,

    #[sea_orm(has_many = "super::organization_employment_type::Entity")]
    EmploymentTypes,

    #[sea_orm(has_many = "super::organization_position::Entity")]
    Positions,

    #[sea_orm(has_many = "super::organization_team::Entity")]
    Teams,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::organization_department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl Related<super::organization_employment_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
