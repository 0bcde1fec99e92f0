use serde::{Deserialize, Serialize};

use tally_core::{Money, ValueObject};

/// A named, priced, categorized item on an order.
///
/// Compared and hashed by value: the same product appearing in two orders is
/// counted as one product with two sales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    category: String,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
