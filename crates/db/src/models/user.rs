//! User entity model.
//!
//! Users are created by the identity adapter on first login and act purely as
//! the ownership anchor for profiles; there is no user CRUD surface.

use serde::Serialize;
use sqlx::FromRow;

use rentledger_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}
