//! Employee entity model
//!
//! This module contains the SeaORM entity model for the employee table, the
//! central record of the workforce schema. An employee wraps exactly one user
//! account and belongs to exactly one organization; both parents cascade
//! their deletion onto the employee row.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Currency;

/// Pay period cadence for an employee's compensation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
    Default,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayPeriod {
    #[sea_orm(string_value = "NONE")]
    #[default]
    None,
    #[sea_orm(string_value = "BI_WEEKLY")]
    BiWeekly,
    #[sea_orm(string_value = "WEEKLY")]
    Weekly,
    #[sea_orm(string_value = "TWICE_PER_MONTH")]
    TwicePerMonth,
    #[sea_orm(string_value = "MONTHLY")]
    Monthly,
}

/// Employee entity representing a user employed by an organization
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    /// Unique identifier for the employee (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Tenant identifier for multi-tenancy
    pub tenant_id: Uuid,

    /// User account this employee wraps (required, unique)
    pub user_id: Uuid,

    /// Organization the employee belongs to (required)
    pub organization_id: Uuid,

    /// Optional contact record
    pub contact_id: Option<Uuid>,

    /// Optional position within the organization
    pub organization_position_id: Option<Uuid>,

    /// Valuation reference date
    pub value_date: Option<DateTimeWithTimeZone>,

    /// Whether the employee is currently active (defaults to true)
    pub is_active: bool,

    /// Short free-text description (at most 200 characters)
    pub short_description: Option<String>,

    /// Long free-text description
    pub description: Option<String>,

    /// Date the employee started working
    pub started_work_on: Option<DateTimeWithTimeZone>,

    /// Date the employee stopped working
    pub end_work: Option<DateTimeWithTimeZone>,

    /// Pay period cadence
    pub pay_period: Option<PayPeriod>,

    /// Billing rate amount
    pub bill_rate_value: Option<Decimal>,

    /// Currency of the billing rate
    pub bill_rate_currency: Option<Currency>,

    /// Recurring weekly hour limit
    pub re_weekly_limit: Option<i32>,

    /// Date an offer was extended
    pub offer_date: Option<DateTimeWithTimeZone>,

    /// Date the offer was accepted
    pub accept_date: Option<DateTimeWithTimeZone>,

    /// Date the offer was rejected
    pub reject_date: Option<DateTimeWithTimeZone>,

    /// Seniority level label (at most 500 characters)
    pub employee_level: Option<String>,

    /// Whether bonuses are anonymized for this employee
    pub anonymous_bonus: Option<bool>,

    /// Persisted aggregate: average income
    pub average_income: Option<Decimal>,

    /// Persisted aggregate: average bonus
    pub average_bonus: Option<Decimal>,

    /// Persisted aggregate: average expenses
    pub average_expenses: Option<Decimal>,

    /// Timestamp when the employee record was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the employee record was last updated
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

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_delete = "Cascade"
    )]
    Organization,

    #[sea_orm(
        belongs_to = "super::contact::Entity",
        from = "Column::ContactId",
        to = "super::contact::Column::Id",
        on_delete = "SetNull"
    )]
    Contact,

    #[sea_orm(
        belongs_to = "super::organization_position::Entity",
        from = "Column::OrganizationPositionId",
        to = "super::organization_position::Column::Id",
        on_delete = "SetNull"
    )]
    OrganizationPosition,

    #[sea_orm(has_many = "super::time_log::Entity")]
    TimeLogs,

    #[sea_orm(has_many = "super::invoice_item::Entity")]
    InvoiceItems,

    #[sea_orm(has_many = "super::request_approval_employee::Entity")]
    RequestApprovalLinks,

    #[sea_orm(has_many = "super::organization_team_employee::Entity")]
    TeamMemberships,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl Related<super::organization_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationPosition.def()
    }
}

impl Related<super::time_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeLogs.def()
    }
}

impl Related<super::invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceItems.def()
    }
}

impl Related<super::request_approval_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestApprovalLinks.def()
    }
}

impl Related<super::organization_team_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMemberships.def()
    }
}

// Many-to-many edges go through their join entities.

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_employee::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_employee::Relation::Employee.def().rev())
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        super::skill_employee::Relation::Skill.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::skill_employee::Relation::Employee.def().rev())
    }
}

impl Related<super::organization_department::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_department_employee::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::organization_department_employee::Relation::Employee
                .def()
                .rev(),
        )
    }
}

impl Related<super::organization_employment_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_employment_type_employee::Relation::EmploymentType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::organization_employment_type_employee::Relation::Employee
                .def()
                .rev(),
        )
    }
}

impl Related<super::organization_team::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_team_employee::Relation::Team.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::organization_team_employee::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
