//! Database seeding functionality
//!
//! Seeds reference data that new organizations are expected to start with.

pub mod employment_type;

pub use employment_type::seed_employment_types;
