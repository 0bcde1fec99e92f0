use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::Money;
use tally_people::{User, UserDirectory};
use tally_sales::{Order, OrderCatalog, Product};

/// Orders and users loaded together, e.g. from a JSON file.
///
/// Prices and salaries are in cents; dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Fixture {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse fixture {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Pick the fixture path: an explicit argument wins over the environment.
    pub fn resolve_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
        arg.or(env)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn into_parts(self) -> (OrderCatalog, UserDirectory) {
        (
            OrderCatalog::from_orders(self.orders),
            UserDirectory::from_users(self.users),
        )
    }

    /// Built-in data used when no fixture file is given.
    pub fn sample() -> Self {
        let laptop = Product::new("Laptop", Money::from_cents(129_900), "Electronics");
        let headphones = Product::new("Headphones", Money::from_cents(19_950), "Electronics");
        let novel = Product::new("Novel", Money::from_cents(1_499), "Books");
        let cookbook = Product::new("Cookbook", Money::from_cents(2_999), "Books");
        let mug = Product::new("Mug", Money::from_cents(899), "Kitchen");

        let day = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 6, d).expect("sample order dates are valid June 2024 days")
        };

        let orders = vec![
            Order::new("1001", day(3), "C-ALPHA", vec![laptop.clone(), headphones.clone()], "PENDING"),
            Order::new("1002", day(3), "C-BRAVO", vec![novel.clone(), mug.clone(), mug.clone()], "PENDING"),
            Order::new("1003", day(5), "C-ALPHA", vec![headphones.clone(), novel.clone()], "SHIPPED"),
            Order::new("1004", day(8), "C-CHARLIE", vec![cookbook.clone(), mug.clone()], "PENDING"),
            Order::new("1005", day(8), "C-BRAVO", vec![laptop, novel, cookbook, mug], "PENDING"),
        ];

        let users = vec![
            User::new("Minji", 28, "Engineering", Money::from_cents(6_200_000)),
            User::new("Jonas", 41, "Engineering", Money::from_cents(8_100_000)),
            User::new("Priya", 35, "Marketing", Money::from_cents(5_400_000)),
            User::new("Tomasz", 41, "Engineering", Money::from_cents(7_900_000)),
            User::new("Ana", 30, "Support", Money::from_cents(4_100_000)),
            User::new("Kwame", 52, "Marketing", Money::from_cents(6_600_000)),
        ];

        Self { orders, users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_environment() {
        let path = Fixture::resolve_path(Some("a.json".into()), Some("b.json".into()));
        assert_eq!(path, Some(PathBuf::from("a.json")));

        let path = Fixture::resolve_path(None, Some("b.json".into()));
        assert_eq!(path, Some(PathBuf::from("b.json")));

        assert_eq!(Fixture::resolve_path(None, Some("   ".into())), None);
        assert_eq!(Fixture::resolve_path(None, None), None);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let fixture = Fixture::from_json(r#"{"users": []}"#).unwrap();
        assert!(fixture.orders.is_empty());
        assert!(fixture.users.is_empty());
    }

    #[test]
    fn load_reports_the_path_on_failure() {
        let err = Fixture::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn sample_orders_are_dated_june_2024() {
        let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let june = first..=last;
        let fixture = Fixture::sample();
        assert!(fixture.orders.iter().all(|o| june.contains(&o.order_date())));
    }

    #[test]
    fn sample_is_populated() {
        let (catalog, directory) = Fixture::sample().into_parts();
        assert_eq!(catalog.len(), 5);
        assert_eq!(directory.len(), 6);
    }
}
