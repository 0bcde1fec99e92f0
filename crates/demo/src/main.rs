use anyhow::Context;

use tally_core::Money;
use tally_demo::{FIXTURE_ENV, Fixture, run_reports};

const HIGH_VALUE_THRESHOLD: Money = Money::from_cents(100_000);

fn main() -> anyhow::Result<()> {
    tally_observability::init();

    let fixture = match Fixture::resolve_path(std::env::args().nth(1), std::env::var(FIXTURE_ENV).ok()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading fixture");
            Fixture::load(&path)?
        }
        None => {
            tracing::warn!("{FIXTURE_ENV} not set and no path given; using built-in sample data");
            Fixture::sample()
        }
    };

    let (mut catalog, mut directory) = fixture.into_parts();

    let report = run_reports(&catalog, &directory, HIGH_VALUE_THRESHOLD);
    let rendered = serde_json::to_string(&report).context("failed to render report")?;
    tracing::info!(report = %rendered, "reports computed");

    for id in catalog
        .find_high_value_orders(HIGH_VALUE_THRESHOLD)
        .into_iter()
        .map(|order| order.id_typed().clone())
        .collect::<Vec<_>>()
    {
        catalog.update_status(&id, |status| format!("{status}+PRIORITY"));
    }
    catalog.for_each(|order| {
        tracing::info!(order_id = %order.id_typed(), status = order.status(), total = %order.total(), "order");
    });

    directory.sort(|a, b| a.name().cmp(b.name()));
    tracing::info!(names = %directory.joined_names(), "directory sorted by name");

    Ok(())
}
