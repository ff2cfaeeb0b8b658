//! Identity-token primitives.
//!
//! - [`jwt`] -- validation (and test/dev issuance) of the HS256 identity
//!   tokens minted by the external identity provider.

pub mod jwt;
