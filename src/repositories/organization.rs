//! Organization repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::DataError;
use crate::models::Currency;
use crate::models::organization::{self, Entity as Organization};

/// Repository for organization database operations
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl OrganizationRepository {
    /// Creates a new OrganizationRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates an organization within a tenant.
    pub async fn create(
        &self,
        tenant_id: Uuid,
        name: &str,
        currency: Currency,
    ) -> Result<organization::Model, DataError> {
        let now = Utc::now();
        let model = organization::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(tenant_id),
            name: Set(name.to_string()),
            currency: Set(currency),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&*self.db)
        .await?;
        Ok(model)
    }

    /// Fetches an organization by id within a tenant.
    pub async fn get(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<organization::Model>, DataError> {
        let found = Organization::find_by_id(id)
            .filter(organization::Column::TenantId.eq(tenant_id))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Deletes an organization; its employees go with it.
    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<(), DataError> {
        let existing = self.get(tenant_id, id).await?.ok_or(DataError::NotFound {
            entity: "organization",
        })?;
        existing.delete(&*self.db).await?;

        tracing::info!(tenant_id = %tenant_id, organization_id = %id, "organization deleted");
        Ok(())
    }
}
