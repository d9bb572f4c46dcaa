//! User repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::DataError;
use crate::models::user::{self, Entity as User};

/// Repository for user database operations
#[derive(Debug, Clone)]
pub struct UserRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates a user account within a tenant.
    ///
    /// Emails are unique per tenant; a duplicate surfaces as
    /// [`DataError::Conflict`].
    pub async fn create(
        &self,
        tenant_id: Uuid,
        email: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<user::Model, DataError> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(tenant_id),
            email: Set(email.to_string()),
            first_name: Set(first_name.map(str::to_string)),
            last_name: Set(last_name.map(str::to_string)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&*self.db)
        .await?;
        Ok(model)
    }

    /// Fetches a user by id within a tenant.
    pub async fn get(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<user::Model>, DataError> {
        let found = User::find_by_id(id)
            .filter(user::Column::TenantId.eq(tenant_id))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Fetches a user by email within a tenant.
    pub async fn find_by_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> Result<Option<user::Model>, DataError> {
        let found = User::find()
            .filter(user::Column::TenantId.eq(tenant_id))
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Deletes a user; the employee record wrapping it goes with it.
    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<(), DataError> {
        let existing = self
            .get(tenant_id, id)
            .await?
            .ok_or(DataError::NotFound { entity: "user" })?;
        existing.delete(&*self.db).await?;
        Ok(())
    }
}
