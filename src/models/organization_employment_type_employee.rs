//! Join entity linking employees to organization employment types

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organization_employment_type_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub organization_employment_type_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization_employment_type::Entity",
        from = "Column::OrganizationEmploymentTypeId",
        to = "super::organization_employment_type::Column::Id",
        on_delete = "Cascade"
    )]
    EmploymentType,

    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::organization_employment_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentType.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
