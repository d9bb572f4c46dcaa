//! Integration tests for delete propagation around the employee record.

mod test_utils;

use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter};

use test_utils::{
    create_test_organization, create_test_tag, create_test_tenant, create_test_user,
    insert_invoice_item, insert_time_log, setup_test_db_arc,
};
use workforce_data::dto::CreateEmployee;
use workforce_data::models::{employee, invoice_item, tag_employee, tenant, time_log};
use workforce_data::repositories::{EmployeeRepository, OrganizationRepository, UserRepository};

#[tokio::test]
async fn employees_are_reachable_from_their_tenant() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_id, "rooted@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let employees = EmployeeRepository::new(db.clone());
    let created = employees
        .create(CreateEmployee::new(tenant_id, user_id, organization_id))
        .await?;

    let tenant_row = tenant::Entity::find_by_id(tenant_id)
        .one(&*db)
        .await?
        .expect("tenant exists");
    let related = tenant_row.find_related(employee::Entity).all(&*db).await?;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, created.id);

    // The tenant FK cascades too.
    tenant_row.delete(&*db).await?;
    assert!(employees.get(tenant_id, created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn deleting_organization_removes_its_employees() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_id, "worker@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let employees = EmployeeRepository::new(db.clone());
    let employee = employees
        .create(CreateEmployee::new(tenant_id, user_id, organization_id))
        .await?;

    OrganizationRepository::new(db.clone())
        .delete(tenant_id, organization_id)
        .await?;

    assert!(employees.get(tenant_id, employee.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn deleting_user_removes_the_wrapping_employee() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_id, "leaving@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let employees = EmployeeRepository::new(db.clone());
    let employee = employees
        .create(CreateEmployee::new(tenant_id, user_id, organization_id))
        .await?;

    UserRepository::new(db.clone())
        .delete(tenant_id, user_id)
        .await?;

    assert!(employees.get(tenant_id, employee.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn deleting_employee_cascades_joins_and_time_logs() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_id, "tracked@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let employees = EmployeeRepository::new(db.clone());
    let employee = employees
        .create(CreateEmployee::new(tenant_id, user_id, organization_id))
        .await?;

    let tag_id = create_test_tag(&db, tenant_id, "billable").await?;
    employees.set_tags(tenant_id, employee.id, &[tag_id]).await?;
    insert_time_log(&db, tenant_id, employee.id).await?;

    employees.delete(tenant_id, employee.id).await?;

    let tag_rows = tag_employee::Entity::find()
        .filter(tag_employee::Column::EmployeeId.eq(employee.id))
        .all(&*db)
        .await?;
    assert!(tag_rows.is_empty());

    let log_rows = time_log::Entity::find()
        .filter(time_log::Column::EmployeeId.eq(employee.id))
        .all(&*db)
        .await?;
    assert!(log_rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn deleting_employee_nulls_invoice_item_reference() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let tenant_id = create_test_tenant(&db).await?;
    let user_id = create_test_user(&db, tenant_id, "billed@example.com").await?;
    let organization_id = create_test_organization(&db, tenant_id).await?;

    let employees = EmployeeRepository::new(db.clone());
    let employee = employees
        .create(CreateEmployee::new(tenant_id, user_id, organization_id))
        .await?;

    let item_id = insert_invoice_item(&db, tenant_id, Some(employee.id)).await?;

    employees.delete(tenant_id, employee.id).await?;

    // The billing record survives with its employee reference nulled out.
    let item = invoice_item::Entity::find_by_id(item_id)
        .one(&*db)
        .await?
        .expect("invoice item survives employee deletion");
    assert!(item.employee_id.is_none());

    Ok(())
}
