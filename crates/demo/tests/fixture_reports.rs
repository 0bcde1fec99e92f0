use std::path::PathBuf;

use chrono::NaiveDate;
use tally_core::{CustomerId, Money, OrderId};
use tally_demo::{Fixture, run_reports};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample.json")
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

#[test]
fn fixture_loads_and_answers_catalog_queries() {
    let (catalog, _) = Fixture::load(fixture_path()).unwrap().into_parts();

    let high: Vec<String> = catalog
        .find_high_value_orders(Money::from_cents(2500))
        .into_iter()
        .map(|o| o.id_typed().to_string())
        .collect();
    assert_eq!(high, vec!["A", "B"]);

    let totals = catalog.total_value_per_customer();
    assert_eq!(totals[&CustomerId::from("c1")], Money::from_cents(8000));
    assert_eq!(totals[&CustomerId::from("c2")], Money::from_cents(1000));

    assert_eq!(
        catalog.top_customer(date(1), date(31)).unwrap(),
        &CustomerId::from("c1")
    );
    assert_eq!(catalog.most_ordered_product().unwrap().name(), "Laptop");
}

#[test]
fn status_updates_are_visible_through_later_queries() {
    let (mut catalog, _) = Fixture::load(fixture_path()).unwrap().into_parts();

    catalog.update_status(&OrderId::from("A"), |s| if s == "PENDING" { "SHIPPED".into() } else { s.into() });

    let shipped = catalog.extract(|o| o.status() == "SHIPPED", |o| o.id_typed().to_string());
    assert_eq!(shipped, vec!["A", "C"]);
}

#[test]
fn fixture_directory_resolves_ties_to_first_listed() {
    let (_, directory) = Fixture::load(fixture_path()).unwrap().into_parts();

    let over_30: Vec<&str> = directory.users_over_30().into_iter().map(|u| u.name()).collect();
    assert_eq!(over_30, vec!["U2", "U3"]);
    assert_eq!(directory.oldest_user_by_department()["Research"].name(), "U2");
}

#[test]
fn full_report_over_fixture() {
    let (catalog, directory) = Fixture::load(fixture_path()).unwrap().into_parts();
    let report = run_reports(&catalog, &directory, Money::from_cents(2500));

    assert_eq!(report.sales.window, Some((date(1), date(2))));
    assert_eq!(report.sales.daily_sales[&date(2)], Money::from_cents(6000));
    assert_eq!(report.sales.pending_orders, vec!["A", "B"]);
    assert_eq!(report.people.average_salary, Some(Money::from_cents(550_000)));
    assert_eq!(report.people.total_age, 95);
}

#[test]
fn fixture_round_trips_through_json() {
    let fixture = Fixture::load(fixture_path()).unwrap();
    let json = serde_json::to_string(&fixture).unwrap();
    assert_eq!(Fixture::from_json(&json).unwrap(), fixture);
}
