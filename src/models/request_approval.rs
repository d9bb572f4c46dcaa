//! Request approval entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// An approval request that one or more employees are involved in
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "request_approvals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub name: String,

    /// Approval status code (1 = requested, 2 = approved, 3 = refused)
    pub status: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::request_approval_employee::Entity")]
    EmployeeLinks,
}

impl Related<super::request_approval_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeLinks.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::request_approval_employee::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::request_approval_employee::Relation::RequestApproval
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
