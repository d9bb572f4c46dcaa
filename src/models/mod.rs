//! # Data Models
//!
//! SeaORM entity models for the workforce data layer. The employee record is
//! the center of the schema; everything else is either a parent it references
//! or a collection reached through a join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod contact;
pub mod employee;
pub mod invoice_item;
pub mod organization;
pub mod organization_department;
pub mod organization_department_employee;
pub mod organization_employment_type;
pub mod organization_employment_type_employee;
pub mod organization_position;
pub mod organization_team;
pub mod organization_team_employee;
pub mod request_approval;
pub mod request_approval_employee;
pub mod skill;
pub mod skill_employee;
pub mod tag;
pub mod tag_employee;
pub mod tenant;
pub mod time_log;
pub mod user;

pub use contact::Entity as Contact;
pub use employee::Entity as Employee;
pub use invoice_item::Entity as InvoiceItem;
pub use organization::Entity as Organization;
pub use organization_department::Entity as OrganizationDepartment;
pub use organization_employment_type::Entity as OrganizationEmploymentType;
pub use organization_position::Entity as OrganizationPosition;
pub use organization_team::Entity as OrganizationTeam;
pub use request_approval::Entity as RequestApproval;
pub use skill::Entity as Skill;
pub use tag::Entity as Tag;
pub use tenant::Entity as Tenant;
pub use time_log::Entity as TimeLog;
pub use user::Entity as User;

/// Currency codes accepted for compensation fields.
///
/// Stored as text; a value outside this set fails both deserialization and
/// column conversion.
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
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[sea_orm(string_value = "USD")]
    #[default]
    Usd,
    #[sea_orm(string_value = "EUR")]
    Eur,
    #[sea_orm(string_value = "GBP")]
    Gbp,
    #[sea_orm(string_value = "BGN")]
    Bgn,
    #[sea_orm(string_value = "ILS")]
    Ils,
    #[sea_orm(string_value = "INR")]
    Inr,
    #[sea_orm(string_value = "CAD")]
    Cad,
    #[sea_orm(string_value = "AUD")]
    Aud,
    #[sea_orm(string_value = "CHF")]
    Chf,
    #[sea_orm(string_value = "CNY")]
    Cny,
    #[sea_orm(string_value = "JPY")]
    Jpy,
    #[sea_orm(string_value = "RUB")]
    Rub,
}
