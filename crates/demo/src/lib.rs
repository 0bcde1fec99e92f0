//! Sample data and report runner for the sales and people modules.

pub mod fixture;
pub mod report;

pub use fixture::Fixture;
pub use report::{Report, run_reports};

/// Environment variable naming a JSON fixture to load instead of the sample.
pub const FIXTURE_ENV: &str = "TALLY_FIXTURE";
