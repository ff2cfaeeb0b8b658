//! Entity models and DTOs, one module per table.

pub mod bill;
pub mod profile;
pub mod user;
