use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use tally_core::{CustomerId, Money};
use tally_people::{User, UserDirectory};
use tally_sales::{OrderCatalog, Product};

/// Every catalog and directory query, evaluated once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sales: SalesReport,
    pub people: PeopleReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub order_count: usize,
    pub high_value_threshold: Money,
    pub high_value_orders: Vec<String>,
    pub total_value_per_customer: BTreeMap<CustomerId, Money>,
    pub most_ordered_product: Option<Product>,
    /// First and last order date, when there are orders.
    pub window: Option<(NaiveDate, NaiveDate)>,
    pub daily_sales: BTreeMap<NaiveDate, Money>,
    pub sales_count_by_category: BTreeMap<String, usize>,
    pub top_customer: Option<CustomerId>,
    pub pending_orders: Vec<String>,
    pub orders_by_total_desc: Vec<String>,
    pub revenue: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeopleReport {
    pub names: String,
    pub by_age: Vec<String>,
    pub over_30: Vec<String>,
    pub headcount_by_department: BTreeMap<String, usize>,
    pub total_age: u64,
    pub average_age: Option<f64>,
    pub average_salary: Option<Money>,
    pub thirties: Vec<String>,
    pub everyone_adult: bool,
    pub oldest_by_department: BTreeMap<String, String>,
    pub longest_name: Option<String>,
    pub senior_names: Vec<String>,
    pub average_age_by_department: BTreeMap<String, f64>,
    pub departments_by_average_age: Vec<(String, f64)>,
}

/// Evaluate every query against the current state. Nothing is mutated.
pub fn run_reports(catalog: &OrderCatalog, directory: &UserDirectory, high_value_threshold: Money) -> Report {
    Report {
        sales: sales_report(catalog, high_value_threshold),
        people: people_report(directory),
    }
}

fn sales_report(catalog: &OrderCatalog, high_value_threshold: Money) -> SalesReport {
    let by_date = catalog.sorted(|a, b| a.order_date().cmp(&b.order_date()));
    let window = by_date
        .first()
        .zip(by_date.last())
        .map(|(first, last)| (first.order_date(), last.order_date()));

    let (daily_sales, top_customer) = match window {
        Some((start, end)) => (
            catalog.daily_sales(start, end),
            catalog.top_customer(start, end).ok().cloned(),
        ),
        None => (BTreeMap::new(), None),
    };

    let mut revenue = Money::ZERO;
    catalog.for_each(|order| revenue += order.total());

    SalesReport {
        order_count: catalog.len(),
        high_value_threshold,
        high_value_orders: catalog
            .find_high_value_orders(high_value_threshold)
            .into_iter()
            .map(|order| order.id_typed().to_string())
            .collect(),
        total_value_per_customer: catalog.total_value_per_customer(),
        most_ordered_product: catalog.most_ordered_product().ok().cloned(),
        window,
        daily_sales,
        sales_count_by_category: catalog.sales_count_by_category(),
        top_customer,
        pending_orders: catalog.extract(
            |order| order.status() == "PENDING",
            |order| order.id_typed().to_string(),
        ),
        orders_by_total_desc: catalog
            .sorted(|a, b| b.total().cmp(&a.total()))
            .into_iter()
            .map(|order| order.id_typed().to_string())
            .collect(),
        revenue,
    }
}

fn people_report(directory: &UserDirectory) -> PeopleReport {
    PeopleReport {
        names: directory.joined_names(),
        by_age: names_of(directory.sorted_by_age()),
        over_30: names_of(directory.users_over_30()),
        headcount_by_department: directory
            .group_by_department()
            .into_iter()
            .map(|(department, members)| (department, members.len()))
            .collect(),
        total_age: directory.total_age(),
        average_age: directory.average_age().ok(),
        average_salary: directory.average_salary().ok(),
        thirties: names_of(directory.users_in_age_range(30, 39)),
        everyone_adult: directory.all_users_at_least(18),
        oldest_by_department: directory
            .oldest_user_by_department()
            .into_iter()
            .map(|(department, user)| (department, user.name().to_string()))
            .collect(),
        longest_name: directory
            .user_with_longest_name()
            .ok()
            .map(|user| user.name().to_string()),
        senior_names: directory.upper_case_names_above_age(40),
        average_age_by_department: directory.average_age_by_department(),
        departments_by_average_age: directory.departments_by_average_age(),
    }
}

fn names_of(users: Vec<&User>) -> Vec<String> {
    users.into_iter().map(|user| user.name().to_string()).collect()
}
