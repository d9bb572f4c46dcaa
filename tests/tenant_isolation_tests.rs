//! Integration tests for tenant isolation in the employee repository.

mod test_utils;

use anyhow::Result;

use test_utils::{
    create_test_organization, create_test_tag, create_test_team, create_test_tenant,
    create_test_user, setup_test_db_arc,
};
use workforce_data::dto::{CreateEmployee, UpdateEmployee};
use workforce_data::error::DataError;
use workforce_data::repositories::{EmployeeFilter, EmployeeRepository};

#[tokio::test]
async fn get_does_not_cross_tenants() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_a = create_test_tenant(&db).await?;
    let tenant_b = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_a, "a@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_a).await?;

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(CreateEmployee::new(tenant_a, user_id, organization_id))
        .await?;

    assert!(repo.get(tenant_a, employee.id).await?.is_some());
    assert!(repo.get(tenant_b, employee.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn list_returns_only_the_callers_tenant() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_a = create_test_tenant(&db).await?;
    let tenant_b = create_test_tenant(&db).await?;

    let repo = EmployeeRepository::new(db.clone());
    for (tenant, email) in [(tenant_a, "a@example.com"), (tenant_b, "b@example.com")] {
        let user_id = create_test_user(&db, tenant, email).await?;
        let organization_id = create_test_organization(&db, tenant).await?;
        repo.create(CreateEmployee::new(tenant, user_id, organization_id))
            .await?;
    }

    let (page_a, _) = repo
        .list(tenant_a, EmployeeFilter::default(), None, 10)
        .await?;
    assert_eq!(page_a.len(), 1);
    assert_eq!(page_a[0].tenant_id, tenant_a);

    let (page_b, _) = repo
        .list(tenant_b, EmployeeFilter::default(), None, 10)
        .await?;
    assert_eq!(page_b.len(), 1);
    assert_eq!(page_b[0].tenant_id, tenant_b);

    Ok(())
}

#[tokio::test]
async fn update_and_delete_refuse_foreign_tenant() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_a = create_test_tenant(&db).await?;
    let tenant_b = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_a, "a@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_a).await?;

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(CreateEmployee::new(tenant_a, user_id, organization_id))
        .await?;

    let update = UpdateEmployee {
        is_active: Some(false),
        ..UpdateEmployee::default()
    };
    let err = repo
        .update(tenant_b, employee.id, update)
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::NotFound { entity: "employee" }));

    let err = repo.delete(tenant_b, employee.id).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound { entity: "employee" }));

    // The record is untouched.
    let still_there = repo
        .get(tenant_a, employee.id)
        .await?
        .expect("record survives foreign-tenant attempts");
    assert!(still_there.is_active);

    Ok(())
}

#[tokio::test]
async fn relationship_assignment_rejects_foreign_tenant_references() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_a = create_test_tenant(&db).await?;
    let tenant_b = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_a, "a@example.com").await?;
    let organization_a = create_test_organization(&db, tenant_a).await?;
    let organization_b = create_test_organization(&db, tenant_b).await?;

    let repo = EmployeeRepository::new(db.clone());
    let employee = repo
        .create(CreateEmployee::new(tenant_a, user_id, organization_a))
        .await?;

    // A tag from another tenant must not be attachable.
    let foreign_tag = create_test_tag(&db, tenant_b, "foreign").await?;
    let err = repo
        .set_tags(tenant_a, employee.id, &[foreign_tag])
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::ForeignKey(_)));

    // Same for team membership.
    let foreign_team = create_test_team(&db, tenant_b, organization_b, "Shadow").await?;
    let err = repo
        .add_to_team(tenant_a, employee.id, foreign_team)
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::ForeignKey(_)));

    // A same-tenant tag still works.
    let own_tag = create_test_tag(&db, tenant_a, "local").await?;
    repo.set_tags(tenant_a, employee.id, &[own_tag]).await?;

    Ok(())
}
