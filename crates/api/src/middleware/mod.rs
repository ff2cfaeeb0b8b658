//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the authenticated landlord from a JWT
//!   Bearer token, creating the user row on first login.

pub mod auth;
