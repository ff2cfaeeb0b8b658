//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&DbPool` as the first argument. Every query on profiles and bills is
//! scoped by the authenticated owner: the `*_owned` methods return nothing
//! for rows belonging to another user, so "not owned" is indistinguishable
//! from "absent" at every layer above.

pub mod bill_repo;
pub mod profile_repo;
pub mod user_repo;

pub use bill_repo::BillRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;
