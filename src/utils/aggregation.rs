use std::collections::{HashMap, HashSet};

use crate::types::{Activity, DeveloperTotals, ALL_DEVELOPERS};

/// Group records by date, summing every metric per bucket.
///
/// Buckets come out in first-seen date order. Each bucket carries the
/// aggregate sentinel as its `name` and the `id` of the first contributing
/// record; every input record is folded into exactly one bucket.
pub fn aggregate_by_date(records: &[Activity]) -> Vec<Activity> {
    let mut buckets: Vec<Activity> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.date.clone()).or_insert_with(|| {
            buckets.push(Activity {
                id: record.id,
                date: record.date.clone(),
                name: ALL_DEVELOPERS.to_string(),
                commits: 0,
                pull_requests_opened: 0,
                pull_requests_merged: 0,
                meetings: 0,
                documentation: 0,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        bucket.commits += record.commits;
        bucket.pull_requests_opened += record.pull_requests_opened;
        bucket.pull_requests_merged += record.pull_requests_merged;
        bucket.meetings += record.meetings;
        bucket.documentation += record.documentation;
    }

    buckets
}

/// Narrow the record set to the selected developer and collapse it to one
/// row per date.
///
/// Every record carries all five metrics, so the metric selection never
/// narrows the set; it only drives chart sizing. The per-developer branch
/// collapses by date as well: the feed does not guarantee at most one record
/// per developer per date, and collapsing is a no-op when dates are already
/// unique. Rows in that branch keep the developer's name. An empty selection
/// string counts as no selection.
pub fn filter_activities(records: &[Activity], developer: Option<&str>) -> Vec<Activity> {
    match developer {
        Some(name) if !name.is_empty() => {
            let own: Vec<Activity> = records
                .iter()
                .filter(|record| record.name == name)
                .cloned()
                .collect();
            let mut rows = aggregate_by_date(&own);
            for row in &mut rows {
                row.name = name.to_string();
            }
            rows
        }
        _ => aggregate_by_date(records),
    }
}

/// Sum all five metrics per developer across the full record set.
///
/// Accumulates independently of the date aggregator; one row per developer,
/// in first-seen order.
pub fn totals_by_developer(records: &[Activity]) -> Vec<DeveloperTotals> {
    let mut totals: Vec<DeveloperTotals> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.name.clone()).or_insert_with(|| {
            totals.push(DeveloperTotals {
                name: record.name.clone(),
                ..DeveloperTotals::default()
            });
            totals.len() - 1
        });

        let row = &mut totals[slot];
        row.commits += record.commits;
        row.pull_requests_opened += record.pull_requests_opened;
        row.pull_requests_merged += record.pull_requests_merged;
        row.meetings += record.meetings;
        row.documentation += record.documentation;
    }

    totals
}

/// Distinct developer names in first-seen order.
pub fn unique_developers(records: &[Activity]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for record in records {
        if seen.insert(record.name.clone()) {
            names.push(record.name.clone());
        }
    }
    names
}
