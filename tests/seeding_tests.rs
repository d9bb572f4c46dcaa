//! Integration tests for employment type seeding.

mod test_utils;

use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use test_utils::{create_test_organization, create_test_tenant, setup_test_db};
use workforce_data::models::organization_employment_type;
use workforce_data::seeds::employment_type::DEFAULT_EMPLOYMENT_TYPES;
use workforce_data::seeds::seed_employment_types;

#[tokio::test]
async fn seeds_the_standard_employment_types() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let created = seed_employment_types(&db, tenant_id, organization_id).await?;
    assert_eq!(created, DEFAULT_EMPLOYMENT_TYPES.len());

    let mut names: Vec<String> = organization_employment_type::Entity::find()
        .filter(organization_employment_type::Column::OrganizationId.eq(organization_id))
        .all(&db)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    names.sort();

    let mut expected: Vec<String> = DEFAULT_EMPLOYMENT_TYPES
        .iter()
        .map(|s| s.to_string())
        .collect();
    expected.sort();

    assert_eq!(names, expected);

    Ok(())
}

#[tokio::test]
async fn seeding_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let first = seed_employment_types(&db, tenant_id, organization_id).await?;
    assert_eq!(first, DEFAULT_EMPLOYMENT_TYPES.len());

    let second = seed_employment_types(&db, tenant_id, organization_id).await?;
    assert_eq!(second, 0);

    Ok(())
}

#[tokio::test]
async fn seeding_is_scoped_per_organization() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let org_a = create_test_organization(&db, tenant_id).await?;
    let org_b = create_test_organization(&db, tenant_id).await?;

    seed_employment_types(&db, tenant_id, org_a).await?;
    let created_for_b = seed_employment_types(&db, tenant_id, org_b).await?;
    assert_eq!(created_for_b, DEFAULT_EMPLOYMENT_TYPES.len());

    Ok(())
}
