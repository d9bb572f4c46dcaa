//! Join entity linking employees to request approvals
//!
//! Carries a per-employee status code alongside the link itself.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "request_approval_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub request_approval_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,

    /// Per-employee approval status code, if decided
    pub status: Option<i32>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::request_approval::Entity",
        from = "Column::RequestApprovalId",
        to = "super::request_approval::Column::Id",
        on_delete = "Cascade"
    )]
    RequestApproval,

    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::request_approval::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestApproval.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
