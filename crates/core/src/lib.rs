//! Domain types and pure computation for the RentLedger backend.
//!
//! - [`billing`] -- bill charge validation and total computation.
//! - [`whatsapp`] -- WhatsApp deep-link derivation for bill summaries.
//! - [`error`] -- the domain error taxonomy shared across crates.

pub mod billing;
pub mod error;
pub mod types;
pub mod whatsapp;
