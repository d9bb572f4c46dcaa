//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, plus fixture helpers for the entities the
//! employee record references.

use anyhow::Result;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use workforce_data::models::{
    Currency, invoice_item, organization, organization_team, skill, tag, tenant, time_log, user,
};

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// SQLite under sqlx enforces foreign keys by default, so cascade and
/// referential-integrity behavior matches the Postgres schema.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Sets up an in-memory SQLite database and returns it Arc-wrapped,
/// ready to hand to the repositories.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Creates a test tenant and returns its id.
pub async fn create_test_tenant(db: &DatabaseConnection) -> Result<Uuid> {
    let id = Uuid::new_v4();
    tenant::ActiveModel {
        id: Set(id),
        name: Set(Some("Test Tenant".to_string())),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Creates a test user within a tenant and returns its id.
#[allow(dead_code)]
pub async fn create_test_user(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    email: &str,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    user::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        email: Set(email.to_string()),
        first_name: Set(Some("Test".to_string())),
        last_name: Set(Some("User".to_string())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Creates a test organization within a tenant and returns its id.
#[allow(dead_code)]
pub async fn create_test_organization(db: &DatabaseConnection, tenant_id: Uuid) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    organization::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        name: Set("Test Organization".to_string()),
        currency: Set(Currency::Usd),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Creates a tag within a tenant and returns its id.
#[allow(dead_code)]
pub async fn create_test_tag(db: &DatabaseConnection, tenant_id: Uuid, name: &str) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    tag::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        name: Set(name.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Creates a skill within a tenant and returns its id.
#[allow(dead_code)]
pub async fn create_test_skill(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    name: &str,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    skill::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        name: Set(name.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Creates a team within an organization and returns its id.
#[allow(dead_code)]
pub async fn create_test_team(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    organization_id: Uuid,
    name: &str,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    organization_team::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        organization_id: Set(organization_id),
        name: Set(name.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Records a completed time log for an employee and returns its id.
#[allow(dead_code)]
pub async fn insert_time_log(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    employee_id: Uuid,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    time_log::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        employee_id: Set(employee_id),
        started_at: Set(now.into()),
        stopped_at: Set(Some(now.into())),
        source: Set("MANUAL".to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Records an invoice item billed against an employee and returns its id.
#[allow(dead_code)]
pub async fn insert_invoice_item(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    employee_id: Option<Uuid>,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    invoice_item::ActiveModel {
        id: Set(id),
        tenant_id: Set(tenant_id),
        employee_id: Set(employee_id),
        description: Set("Consulting hours".to_string()),
        unit_cost: Set(Decimal::new(100, 0)),
        quantity: Set(8),
        total_value: Set(Decimal::new(800, 0)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;
    Ok(id)
}
