//! HTTP handlers, one module per resource.

pub mod bill;
pub mod profile;
