//! # Input and Output Types
//!
//! Request/response types for the employee record, with the declared
//! validation rules and the OpenAPI schema metadata the data layer
//! contributes to an external generator.
//!
//! Enum membership (pay period, currency) is enforced by the types
//! themselves: an out-of-set string fails deserialization before any
//! validation code runs. The checks here cover what the type system cannot
//! express, namely length bounds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DataError;
use crate::models::Currency;
use crate::models::employee::{self, PayPeriod};

/// Longest accepted `short_description`, in characters.
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 200;

/// Longest accepted `employee_level`, in characters.
pub const EMPLOYEE_LEVEL_MAX_CHARS: usize = 500;

/// Payload for creating an employee record.
///
/// `user_id` and `organization_id` are required; everything else is
/// optional. `is_active` defaults to true when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployee {
    /// Tenant the record belongs to
    pub tenant_id: Uuid,
    /// User account the employee wraps (required)
    pub user_id: Uuid,
    /// Organization the employee belongs to (required)
    pub organization_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_position_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<DateTime<Utc>>,
    /// Defaults to true when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// At most 200 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 200)]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_work_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_work: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<PayPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_rate_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_rate_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_weekly_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_date: Option<DateTime<Utc>>,
    /// At most 500 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 500)]
    pub employee_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_bonus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_income: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_bonus: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_expenses: Option<Decimal>,
}

impl CreateEmployee {
    /// Minimal payload: the two required references plus defaults.
    pub fn new(tenant_id: Uuid, user_id: Uuid, organization_id: Uuid) -> Self {
        Self {
            tenant_id,
            user_id,
            organization_id,
            contact_id: None,
            organization_position_id: None,
            value_date: None,
            is_active: None,
            short_description: None,
            description: None,
            started_work_on: None,
            end_work: None,
            pay_period: None,
            bill_rate_value: None,
            bill_rate_currency: None,
            re_weekly_limit: None,
            offer_date: None,
            accept_date: None,
            reject_date: None,
            employee_level: None,
            anonymous_bonus: None,
            average_income: None,
            average_bonus: None,
            average_expenses: None,
        }
    }

    /// Check the declared field constraints.
    pub fn validate(&self) -> Result<(), DataError> {
        check_len(
            "short_description",
            self.short_description.as_deref(),
            SHORT_DESCRIPTION_MAX_CHARS,
        )?;
        check_len(
            "employee_level",
            self.employee_level.as_deref(),
            EMPLOYEE_LEVEL_MAX_CHARS,
        )?;
        Ok(())
    }

    /// Build the insertable active model, applying defaults.
    pub fn into_active_model(self, id: Uuid) -> employee::ActiveModel {
        let now = Utc::now();
        employee::ActiveModel {
            id: Set(id),
            tenant_id: Set(self.tenant_id),
            user_id: Set(self.user_id),
            organization_id: Set(self.organization_id),
            contact_id: Set(self.contact_id),
            organization_position_id: Set(self.organization_position_id),
            value_date: Set(self.value_date.map(Into::into)),
            is_active: Set(self.is_active.unwrap_or(true)),
            short_description: Set(self.short_description),
            description: Set(self.description),
            started_work_on: Set(self.started_work_on.map(Into::into)),
            end_work: Set(self.end_work.map(Into::into)),
            pay_period: Set(self.pay_period),
            bill_rate_value: Set(self.bill_rate_value),
            bill_rate_currency: Set(self.bill_rate_currency),
            re_weekly_limit: Set(self.re_weekly_limit),
            offer_date: Set(self.offer_date.map(Into::into)),
            accept_date: Set(self.accept_date.map(Into::into)),
            reject_date: Set(self.reject_date.map(Into::into)),
            employee_level: Set(self.employee_level),
            anonymous_bonus: Set(self.anonymous_bonus),
            average_income: Set(self.average_income),
            average_bonus: Set(self.average_bonus),
            average_expenses: Set(self.average_expenses),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Partial update payload for an employee record.
///
/// Only fields that are present are written; absent fields keep their
/// stored value. Clearing a nullable field is expressed with an explicit
/// null in the double-`Option` fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_position_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// At most 200 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 200)]
    pub short_description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_work_on: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_work: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<Option<PayPeriod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_rate_value: Option<Option<Decimal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_rate_currency: Option<Option<Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_weekly_limit: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_date: Option<Option<DateTime<Utc>>>,
    /// At most 500 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 500)]
    pub employee_level: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_bonus: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_income: Option<Option<Decimal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_bonus: Option<Option<Decimal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_expenses: Option<Option<Decimal>>,
}

impl UpdateEmployee {
    /// Check the declared field constraints on present fields.
    pub fn validate(&self) -> Result<(), DataError> {
        if let Some(Some(value)) = &self.short_description {
            check_len(
                "short_description",
                Some(value.as_str()),
                SHORT_DESCRIPTION_MAX_CHARS,
            )?;
        }
        if let Some(Some(value)) = &self.employee_level {
            check_len("employee_level", Some(value.as_str()), EMPLOYEE_LEVEL_MAX_CHARS)?;
        }
        Ok(())
    }

    /// Apply the present fields onto an active model.
    pub fn apply(self, model: &mut employee::ActiveModel) {
        if let Some(v) = self.contact_id {
            model.contact_id = Set(v);
        }
        if let Some(v) = self.organization_position_id {
            model.organization_position_id = Set(v);
        }
        if let Some(v) = self.value_date {
            model.value_date = Set(v.map(Into::into));
        }
        if let Some(v) = self.is_active {
            model.is_active = Set(v);
        }
        if let Some(v) = self.short_description {
            model.short_description = Set(v);
        }
        if let Some(v) = self.description {
            model.description = Set(v);
        }
        if let Some(v) = self.started_work_on {
            model.started_work_on = Set(v.map(Into::into));
        }
        if let Some(v) = self.end_work {
            model.end_work = Set(v.map(Into::into));
        }
        if let Some(v) = self.pay_period {
            model.pay_period = Set(v);
        }
        if let Some(v) = self.bill_rate_value {
            model.bill_rate_value = Set(v);
        }
        if let Some(v) = self.bill_rate_currency {
            model.bill_rate_currency = Set(v);
        }
        if let Some(v) = self.re_weekly_limit {
            model.re_weekly_limit = Set(v);
        }
        if let Some(v) = self.offer_date {
            model.offer_date = Set(v.map(Into::into));
        }
        if let Some(v) = self.accept_date {
            model.accept_date = Set(v.map(Into::into));
        }
        if let Some(v) = self.reject_date {
            model.reject_date = Set(v.map(Into::into));
        }
        if let Some(v) = self.employee_level {
            model.employee_level = Set(v);
        }
        if let Some(v) = self.anonymous_bonus {
            model.anonymous_bonus = Set(v);
        }
        if let Some(v) = self.average_income {
            model.average_income = Set(v);
        }
        if let Some(v) = self.average_bonus {
            model.average_bonus = Set(v);
        }
        if let Some(v) = self.average_expenses {
            model.average_expenses = Set(v);
        }
        model.updated_at = Set(Utc::now().into());
    }
}

/// Employee record as exposed to API consumers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub contact_id: Option<Uuid>,
    pub organization_position_id: Option<Uuid>,
    pub value_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub started_work_on: Option<DateTime<Utc>>,
    pub end_work: Option<DateTime<Utc>>,
    pub pay_period: Option<PayPeriod>,
    pub bill_rate_value: Option<Decimal>,
    pub bill_rate_currency: Option<Currency>,
    pub re_weekly_limit: Option<i32>,
    pub offer_date: Option<DateTime<Utc>>,
    pub accept_date: Option<DateTime<Utc>>,
    pub reject_date: Option<DateTime<Utc>>,
    pub employee_level: Option<String>,
    pub anonymous_bonus: Option<bool>,
    pub average_income: Option<Decimal>,
    pub average_bonus: Option<Decimal>,
    pub average_expenses: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee::Model> for EmployeeDto {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            user_id: model.user_id,
            organization_id: model.organization_id,
            contact_id: model.contact_id,
            organization_position_id: model.organization_position_id,
            value_date: model.value_date.map(Into::into),
            is_active: model.is_active,
            short_description: model.short_description,
            description: model.description,
            started_work_on: model.started_work_on.map(Into::into),
            end_work: model.end_work.map(Into::into),
            pay_period: model.pay_period,
            bill_rate_value: model.bill_rate_value,
            bill_rate_currency: model.bill_rate_currency,
            re_weekly_limit: model.re_weekly_limit,
            offer_date: model.offer_date.map(Into::into),
            accept_date: model.accept_date.map(Into::into),
            reject_date: model.reject_date.map(Into::into),
            employee_level: model.employee_level,
            anonymous_bonus: model.anonymous_bonus,
            average_income: model.average_income,
            average_bonus: model.average_bonus,
            average_expenses: model.average_expenses,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Generic paginated response wrapper for list operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items for the current page
    pub data: Vec<T>,
    /// Opaque cursor for fetching the next page (null if this is the last page)
    pub next_cursor: Option<String>,
    /// Convenience field indicating if more pages exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            data,
            next_cursor,
            has_more: Some(has_more),
        }
    }
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), DataError> {
    if let Some(value) = value {
        let chars = value.chars().count();
        if chars > max {
            return Err(DataError::validation(
                field,
                format!("must be at most {} characters, got {}", max, chars),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> CreateEmployee {
        CreateEmployee::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn accepts_short_description_at_limit() {
        let mut input = minimal();
        input.short_description = Some("x".repeat(SHORT_DESCRIPTION_MAX_CHARS));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_short_description_over_limit() {
        let mut input = minimal();
        input.short_description = Some("x".repeat(SHORT_DESCRIPTION_MAX_CHARS + 1));
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::Validation {
                field: "short_description",
                ..
            }
        ));
    }

    #[test]
    fn rejects_employee_level_over_limit() {
        let mut input = minimal();
        input.employee_level = Some("x".repeat(EMPLOYEE_LEVEL_MAX_CHARS + 1));
        assert!(input.validate().is_err());
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        let mut input = minimal();
        // 200 multi-byte characters are within the limit even though the
        // byte length is far larger.
        input.short_description = Some("日".repeat(SHORT_DESCRIPTION_MAX_CHARS));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn unknown_pay_period_fails_deserialization() {
        let json = serde_json::json!({
            "tenant_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "organization_id": Uuid::new_v4(),
            "pay_period": "YEARLY"
        });
        assert!(serde_json::from_value::<CreateEmployee>(json).is_err());
    }

    #[test]
    fn unknown_currency_fails_deserialization() {
        let json = serde_json::json!({
            "tenant_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "organization_id": Uuid::new_v4(),
            "bill_rate_currency": "DOGE"
        });
        assert!(serde_json::from_value::<CreateEmployee>(json).is_err());
    }

    #[test]
    fn known_enum_values_deserialize() {
        let json = serde_json::json!({
            "tenant_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "organization_id": Uuid::new_v4(),
            "pay_period": "TWICE_PER_MONTH",
            "bill_rate_currency": "EUR"
        });
        let input: CreateEmployee = serde_json::from_value(json).expect("valid enums parse");
        assert_eq!(input.pay_period, Some(PayPeriod::TwicePerMonth));
        assert_eq!(input.bill_rate_currency, Some(Currency::Eur));
    }

    #[test]
    fn is_active_defaults_to_true_in_active_model() {
        let model = minimal().into_active_model(Uuid::new_v4());
        assert_eq!(model.is_active, Set(true));
    }
}
