//! # Workforce Data Layer
//!
//! Persistence layer for a multi-tenant HR/business management application,
//! centered on the employee record: entity models, migrations, validated
//! input types, and tenant-aware repositories.

pub mod config;
pub mod cursor;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seeds;
pub mod telemetry;
pub use migration;
