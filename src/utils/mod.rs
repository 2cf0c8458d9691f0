pub mod aggregation;

pub use aggregation::{aggregate_by_date, filter_activities, totals_by_developer, unique_developers};
