//! Sales domain module.
//!
//! Orders, the products they contain, and the in-memory catalog that answers
//! reporting queries over them. Pure domain logic (no IO, no storage).

pub mod catalog;
pub mod order;
pub mod product;

pub use catalog::OrderCatalog;
pub use order::Order;
pub use product::Product;
