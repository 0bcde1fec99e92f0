//! People domain module (employees and their departments).
//!
//! An in-memory directory of users with reporting queries, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod directory;
pub mod user;

pub use directory::UserDirectory;
pub use user::User;
