//! In-memory order catalog with reporting queries.
//!
//! The catalog owns its orders exclusively. Queries hand out shared borrows or
//! owned copies, so nothing outside can change an order except through
//! [`OrderCatalog::update_status`].
//!
//! Boundary and tie rules:
//! - value thresholds are exclusive (`total > min_total`)
//! - date windows are inclusive on both ends
//! - max-style queries return the earliest candidate on a tie

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use tally_core::query::{first_max_by_key, tally_by, tally_in_order};
use tally_core::{CustomerId, DomainError, DomainResult, Money, OrderId};

use crate::order::Order;
use crate::product::Product;

/// Ordered, mutable collection of orders.
///
/// Not synchronized: wrap in a lock if it must be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct OrderCatalog {
    orders: Vec<Order>,
    seen_ids: HashSet<OrderId>,
}

impl OrderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut catalog = Self::new();
        for order in orders {
            catalog.add(order);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Append an order. Duplicate ids are accepted; lookups and status updates
    /// only ever see the first order with a given id.
    pub fn add(&mut self, order: Order) {
        if !self.seen_ids.insert(order.id_typed().clone()) {
            tracing::warn!(order_id = %order.id_typed(), "duplicate order id added to catalog");
        }
        tracing::debug!(
            order_id = %order.id_typed(),
            customer_id = %order.customer_id(),
            lines = order.products().len(),
            "order added"
        );
        self.orders.push(order);
    }

    /// First order with the given id.
    pub fn get(&self, order_id: &OrderId) -> DomainResult<&Order> {
        self.position(order_id)
            .map(|idx| &self.orders[idx])
            .ok_or_else(|| DomainError::not_found(format!("order {order_id}")))
    }

    /// Independent copy of every order in catalog order.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Orders whose total is strictly greater than `min_total`, in catalog order.
    pub fn find_high_value_orders(&self, min_total: Money) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.total() > min_total)
            .collect()
    }

    /// Summed order totals per customer. Customers without orders are absent.
    pub fn total_value_per_customer(&self) -> BTreeMap<CustomerId, Money> {
        tally_by(
            &self.orders,
            |order| order.customer_id().clone(),
            |order| order.total(),
        )
    }

    /// The product that appears on the most order lines.
    ///
    /// Ties go to the product seen first when walking orders (and their lines)
    /// in catalog order.
    pub fn most_ordered_product(&self) -> DomainResult<&Product> {
        let counts = tally_in_order(self.lines(), |product| *product, |_| 1usize);

        first_max_by_key(counts, |(_, count)| *count)
            .map(|(product, _)| product)
            .ok_or_else(|| DomainError::not_found("no products have been ordered"))
    }

    /// Sales per order date within `[start, end]`.
    pub fn daily_sales(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, Money> {
        tally_by(
            self.placed_between(start, end),
            |order| order.order_date(),
            |order| order.total(),
        )
    }

    /// Replace the status of the first order with `order_id` by
    /// `update(current_status)`.
    ///
    /// An unknown id changes nothing. Returns whether an order was updated.
    pub fn update_status<F>(&mut self, order_id: &OrderId, update: F) -> bool
    where
        F: FnOnce(&str) -> String,
    {
        let Some(idx) = self.position(order_id) else {
            tracing::debug!(%order_id, "status update skipped: no such order");
            return false;
        };

        let order = &mut self.orders[idx];
        let next = update(order.status());
        tracing::debug!(%order_id, from = order.status(), to = %next, "order status updated");
        order.set_status(next);
        true
    }

    /// `map(order)` for every order matching `filter`, in catalog order.
    pub fn extract<T, P, M>(&self, mut filter: P, map: M) -> Vec<T>
    where
        P: FnMut(&Order) -> bool,
        M: FnMut(&Order) -> T,
    {
        self.orders
            .iter()
            .filter(|order| filter(order))
            .map(map)
            .collect()
    }

    /// Number of order lines per product category (repeat lines count again).
    pub fn sales_count_by_category(&self) -> BTreeMap<String, usize> {
        tally_by(self.lines(), |product| product.category().to_owned(), |_| 1usize)
    }

    /// Customer with the highest summed total within `[start, end]`.
    ///
    /// Ties go to the customer whose first in-window order comes first.
    pub fn top_customer(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<&CustomerId> {
        let totals = tally_in_order(
            self.placed_between(start, end),
            |order| order.customer_id(),
            |order| order.total(),
        );

        first_max_by_key(totals, |(_, total)| *total)
            .map(|(customer, _)| customer)
            .ok_or_else(|| DomainError::not_found(format!("no orders between {start} and {end}")))
    }

    /// Run `process` on every order in catalog order.
    pub fn for_each<F>(&self, process: F)
    where
        F: FnMut(&Order),
    {
        self.orders.iter().for_each(process);
    }

    /// A stably sorted view of the orders. The catalog's own order is untouched.
    pub fn sorted<F>(&self, mut compare: F) -> Vec<&Order>
    where
        F: FnMut(&Order, &Order) -> Ordering,
    {
        let mut view: Vec<&Order> = self.orders.iter().collect();
        view.sort_by(|a, b| compare(a, b));
        view
    }

    fn position(&self, order_id: &OrderId) -> Option<usize> {
        self.orders.iter().position(|order| order.id_typed() == order_id)
    }

    fn lines(&self) -> impl Iterator<Item = &Product> {
        self.orders.iter().flat_map(|order| order.products())
    }

    fn placed_between(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.placed_between(start, end))
    }
}
