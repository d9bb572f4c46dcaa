//! Employment type seeding functionality
//!
//! Populates an organization's employment type catalog with the standard
//! set. Seeding is idempotent: types that already exist (by name) are left
//! alone.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::organization_employment_type::{self, Entity as OrganizationEmploymentType};

/// Standard employment type names every organization starts with.
pub const DEFAULT_EMPLOYMENT_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Intern",
    "Probation",
    "Seasonal",
];

/// Seeds the employment type catalog for an organization.
///
/// Returns the number of types created.
pub async fn seed_employment_types(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    organization_id: Uuid,
) -> Result<usize> {
    let existing: Vec<String> = OrganizationEmploymentType::find()
        .filter(organization_employment_type::Column::OrganizationId.eq(organization_id))
        .all(db)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    let mut created = 0;
    for name in DEFAULT_EMPLOYMENT_TYPES {
        if existing.iter().any(|have| have == name) {
            continue;
        }

        let now = Utc::now();
        organization_employment_type::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(tenant_id),
            organization_id: Set(organization_id),
            name: Set((*name).to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!(
            organization_id = %organization_id,
            created,
            "seeded employment types"
        );
    }

    Ok(created)
}
