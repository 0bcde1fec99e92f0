use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::{CustomerId, Entity, Money, OrderId};

use crate::product::Product;

/// A customer purchase.
///
/// Everything except `status` is fixed at construction. The total is derived
/// from the current products on every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_date: NaiveDate,
    customer_id: CustomerId,
    products: Vec<Product>,
    status: String,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        order_date: NaiveDate,
        customer_id: impl Into<CustomerId>,
        products: Vec<Product>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            order_date,
            customer_id: customer_id.into(),
            products,
            status: status.into(),
        }
    }

    pub fn id_typed(&self) -> &OrderId {
        &self.id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Sum of product prices.
    pub fn total(&self) -> Money {
        self.products.iter().map(Product::price).sum()
    }

    /// Whether the order date falls within `[start, end]`.
    pub fn placed_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.order_date && self.order_date <= end
    }

    // Status changes go through `OrderCatalog::update_status`.
    pub(crate) fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
