//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the sales and
//! people modules (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod query;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId};
pub use money::Money;
pub use value_object::ValueObject;
