//! OpenAPI component document for the data layer.
//!
//! The crate exposes no HTTP routes; it contributes typed schemas to an
//! external OpenAPI generator. The document produced here contains the
//! component schemas only.

use utoipa::OpenApi;

use crate::dto::{CreateEmployee, EmployeeDto, PaginatedResponse, UpdateEmployee};
use crate::models::Currency;
use crate::models::employee::PayPeriod;

/// OpenAPI components contributed by the workforce data layer.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workforce Data Schemas",
        description = "Component schemas for the employee record and its inputs",
        version = env!("CARGO_PKG_VERSION"),
    ),
    components(schemas(
        EmployeeDto,
        CreateEmployee,
        UpdateEmployee,
        PayPeriod,
        Currency,
        PaginatedResponse<EmployeeDto>,
    ))
)]
pub struct ApiDoc;

/// Renders the component document as pretty-printed JSON.
pub fn openapi_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_contains_employee_schemas() {
        let json = openapi_json().expect("document renders");
        assert!(json.contains("EmployeeDto"));
        assert!(json.contains("CreateEmployee"));
        assert!(json.contains("PayPeriod"));
        assert!(json.contains("BI_WEEKLY"));
        assert!(json.contains("Currency"));
    }
}
