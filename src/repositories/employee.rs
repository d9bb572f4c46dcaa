//! Employee repository for database operations
//!
//! This module provides the EmployeeRepository struct which encapsulates
//! SeaORM operations for the employee table with tenant-aware methods,
//! cursor-based pagination, and relationship assignment.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::cursor::{decode_cursor, encode_cursor};
use crate::dto::{CreateEmployee, UpdateEmployee};
use crate::error::DataError;
use crate::models::employee::{self, Entity as Employee};
use crate::models::{
    organization_department, organization_department_employee, organization_employment_type,
    organization_employment_type_employee, organization_team, organization_team_employee,
    request_approval, request_approval_employee, skill, skill_employee, tag, tag_employee,
    time_log,
};

/// Optional filters for employee listings.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub organization_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

/// Repository for employee database operations
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates an employee record from a validated input payload.
    ///
    /// The required user and organization references are enforced by the
    /// schema; a dangling reference surfaces as [`DataError::ForeignKey`]
    /// and a second employee for the same user as [`DataError::Conflict`].
    pub async fn create(&self, input: CreateEmployee) -> Result<employee::Model, DataError> {
        input.validate()?;

        let id = Uuid::new_v4();
        let tenant_id = input.tenant_id;
        let model = input.into_active_model(id).insert(&*self.db).await?;

        tracing::info!(
            tenant_id = %tenant_id,
            employee_id = %model.id,
            user_id = %model.user_id,
            organization_id = %model.organization_id,
            "employee created"
        );

        Ok(model)
    }

    /// Fetches an employee by id within a tenant.
    pub async fn get(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<employee::Model>, DataError> {
        let found = Employee::find_by_id(id)
            .filter(employee::Column::TenantId.eq(tenant_id))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Fetches the employee wrapping a given user account, if any.
    pub async fn find_by_user(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<employee::Model>, DataError> {
        let found = Employee::find()
            .filter(employee::Column::TenantId.eq(tenant_id))
            .filter(employee::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Lists employees for a tenant, newest first, with keyset pagination.
    ///
    /// Returns the page of models and an opaque cursor for the next page
    /// (None when the listing is exhausted).
    pub async fn list(
        &self,
        tenant_id: Uuid,
        filter: EmployeeFilter,
        cursor: Option<&str>,
        limit: u64,
    ) -> Result<(Vec<employee::Model>, Option<String>), DataError> {
        let limit = limit.clamp(1, 200);

        let mut query = Employee::find()
            .filter(employee::Column::TenantId.eq(tenant_id))
            .order_by_desc(employee::Column::CreatedAt)
            .order_by_desc(employee::Column::Id);

        if let Some(organization_id) = filter.organization_id {
            query = query.filter(employee::Column::OrganizationId.eq(organization_id));
        }

        if let Some(is_active) = filter.is_active {
            query = query.filter(employee::Column::IsActive.eq(is_active));
        }

        if let Some(cursor) = cursor {
            let position = decode_cursor(cursor)?;
            // Keyset condition: strictly before the cursor position in the
            // (created_at DESC, id DESC) ordering.
            query = query.filter(
                Condition::any()
                    .add(employee::Column::CreatedAt.lt(position.created_at))
                    .add(
                        Condition::all()
                            .add(employee::Column::CreatedAt.eq(position.created_at))
                            .add(employee::Column::Id.lt(position.id)),
                    ),
            );
        }

        // Fetch one extra row to know whether another page exists.
        let mut rows = query.limit(limit + 1).all(&*self.db).await?;

        let next_cursor = if rows.len() as u64 > limit {
            rows.truncate(limit as usize);
            rows.last()
                .map(|last| encode_cursor(&last.created_at.into(), &last.id))
        } else {
            None
        };

        Ok((rows, next_cursor))
    }

    /// Applies a partial update to an employee within a tenant.
    pub async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        update: UpdateEmployee,
    ) -> Result<employee::Model, DataError> {
        update.validate()?;

        let existing = self.require(tenant_id, id).await?;

        let mut active: employee::ActiveModel = existing.into();
        update.apply(&mut active);

        let model = active.update(&*self.db).await?;
        Ok(model)
    }

    /// Deletes an employee within a tenant.
    ///
    /// Join rows and time logs cascade at the schema level; invoice items
    /// keep their row with a nulled employee reference.
    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<(), DataError> {
        let existing = self.require(tenant_id, id).await?;
        existing.delete(&*self.db).await?;

        tracing::info!(tenant_id = %tenant_id, employee_id = %id, "employee deleted");
        Ok(())
    }

    /// Replaces the set of tags attached to an employee.
    ///
    /// Tag ids outside the employee's tenant are rejected.
    pub async fn set_tags(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        let known = tag::Entity::find()
            .filter(tag::Column::TenantId.eq(tenant_id))
            .filter(tag::Column::Id.is_in(tag_ids.iter().copied()))
            .count(&*self.db)
            .await?;
        if known != tag_ids.len() as u64 {
            return Err(DataError::ForeignKey(
                "tag does not exist in tenant".to_string(),
            ));
        }

        tag_employee::Entity::delete_many()
            .filter(tag_employee::Column::EmployeeId.eq(id))
            .exec(&*self.db)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let rows = tag_ids.iter().map(|tag_id| tag_employee::ActiveModel {
            tag_id: Set(*tag_id),
            employee_id: Set(id),
            created_at: Set(now.into()),
        });
        tag_employee::Entity::insert_many(rows)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    /// Replaces the set of skills attached to an employee.
    pub async fn set_skills(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        skill_ids: &[Uuid],
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        let known = skill::Entity::find()
            .filter(skill::Column::TenantId.eq(tenant_id))
            .filter(skill::Column::Id.is_in(skill_ids.iter().copied()))
            .count(&*self.db)
            .await?;
        if known != skill_ids.len() as u64 {
            return Err(DataError::ForeignKey(
                "skill does not exist in tenant".to_string(),
            ));
        }

        skill_employee::Entity::delete_many()
            .filter(skill_employee::Column::EmployeeId.eq(id))
            .exec(&*self.db)
            .await?;

        if skill_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let rows = skill_ids.iter().map(|skill_id| skill_employee::ActiveModel {
            skill_id: Set(*skill_id),
            employee_id: Set(id),
            created_at: Set(now.into()),
        });
        skill_employee::Entity::insert_many(rows)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    /// Replaces the departments an employee is assigned to.
    pub async fn set_departments(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        department_ids: &[Uuid],
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        let known = organization_department::Entity::find()
            .filter(organization_department::Column::TenantId.eq(tenant_id))
            .filter(organization_department::Column::Id.is_in(department_ids.iter().copied()))
            .count(&*self.db)
            .await?;
        if known != department_ids.len() as u64 {
            return Err(DataError::ForeignKey(
                "department does not exist in tenant".to_string(),
            ));
        }

        organization_department_employee::Entity::delete_many()
            .filter(organization_department_employee::Column::EmployeeId.eq(id))
            .exec(&*self.db)
            .await?;

        if department_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let rows = department_ids
            .iter()
            .map(|dep_id| organization_department_employee::ActiveModel {
                organization_department_id: Set(*dep_id),
                employee_id: Set(id),
                created_at: Set(now.into()),
            });
        organization_department_employee::Entity::insert_many(rows)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    /// Replaces the employment types recorded for an employee.
    pub async fn set_employment_types(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        employment_type_ids: &[Uuid],
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        let known = organization_employment_type::Entity::find()
            .filter(organization_employment_type::Column::TenantId.eq(tenant_id))
            .filter(
                organization_employment_type::Column::Id
                    .is_in(employment_type_ids.iter().copied()),
            )
            .count(&*self.db)
            .await?;
        if known != employment_type_ids.len() as u64 {
            return Err(DataError::ForeignKey(
                "employment type does not exist in tenant".to_string(),
            ));
        }

        organization_employment_type_employee::Entity::delete_many()
            .filter(organization_employment_type_employee::Column::EmployeeId.eq(id))
            .exec(&*self.db)
            .await?;

        if employment_type_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let rows = employment_type_ids.iter().map(|type_id| {
            organization_employment_type_employee::ActiveModel {
                organization_employment_type_id: Set(*type_id),
                employee_id: Set(id),
                created_at: Set(now.into()),
            }
        });
        organization_employment_type_employee::Entity::insert_many(rows)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    /// Adds an employee to a team within the same tenant. Adding twice is
    /// a conflict.
    pub async fn add_to_team(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        team_id: Uuid,
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        organization_team::Entity::find_by_id(team_id)
            .filter(organization_team::Column::TenantId.eq(tenant_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| DataError::ForeignKey("team does not exist in tenant".to_string()))?;

        organization_team_employee::ActiveModel {
            organization_team_id: Set(team_id),
            employee_id: Set(id),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(())
    }

    /// Lists the teams an employee is a member of.
    pub async fn teams(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Vec<organization_team::Model>, DataError> {
        let employee = self.require(tenant_id, id).await?;
        let teams = employee
            .find_related(organization_team::Entity)
            .all(&*self.db)
            .await?;
        Ok(teams)
    }

    /// Links an employee to a request approval within the same tenant.
    pub async fn link_request_approval(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        request_approval_id: Uuid,
    ) -> Result<(), DataError> {
        self.require(tenant_id, id).await?;

        request_approval::Entity::find_by_id(request_approval_id)
            .filter(request_approval::Column::TenantId.eq(tenant_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                DataError::ForeignKey("request approval does not exist in tenant".to_string())
            })?;

        request_approval_employee::ActiveModel {
            request_approval_id: Set(request_approval_id),
            employee_id: Set(id),
            status: Set(None),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(())
    }

    /// Lists the time logs recorded for an employee, newest first.
    pub async fn time_logs(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Vec<time_log::Model>, DataError> {
        self.require(tenant_id, id).await?;

        let logs = time_log::Entity::find()
            .filter(time_log::Column::TenantId.eq(tenant_id))
            .filter(time_log::Column::EmployeeId.eq(id))
            .order_by_desc(time_log::Column::StartedAt)
            .all(&*self.db)
            .await?;
        Ok(logs)
    }

    async fn require(&self, tenant_id: Uuid, id: Uuid) -> Result<employee::Model, DataError> {
        self.get(tenant_id, id)
            .await?
            .ok_or(DataError::NotFound { entity: "employee" })
    }
}
