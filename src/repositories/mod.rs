//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for the
//! workforce entities, providing a clean API for data access with
//! tenant-aware methods.

pub mod employee;
pub mod organization;
pub mod user;

pub use employee::{EmployeeFilter, EmployeeRepository};
pub use organization::OrganizationRepository;
pub use user::UserRepository;
