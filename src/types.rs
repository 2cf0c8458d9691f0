//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing activity records, metric selection and per-developer totals.

use serde::Deserialize;

/// Reserved developer name carried by aggregated rows. The feed never uses it
/// for a real developer.
pub const ALL_DEVELOPERS: &str = "All";

/// One observation of a developer's activity counts on a given date.
///
/// Records are created by deserializing the fetched JSON feed and are never
/// mutated afterwards; aggregated and filtered views are derived copies.
/// Unknown keys in the payload are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Activity {
    /// Record identifier, not required to be unique.
    #[serde(default)]
    pub id: i64,
    /// Calendar date, string-encoded (e.g. `"2024-01-01"`).
    pub date: String,
    /// Developer identifier, or [`ALL_DEVELOPERS`] on aggregated rows.
    pub name: String,
    // A record missing a count deserializes as zero rather than poisoning
    // the running sums downstream.
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub pull_requests_opened: u64,
    #[serde(default)]
    pub pull_requests_merged: u64,
    #[serde(default)]
    pub meetings: u64,
    #[serde(default)]
    pub documentation: u64,
}

/// The five countable activity types tracked per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Commits,
    PullRequestsOpened,
    PullRequestsMerged,
    Meetings,
    Documentation,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Commits,
        Metric::PullRequestsOpened,
        Metric::PullRequestsMerged,
        Metric::Meetings,
        Metric::Documentation,
    ];

    /// Field name as it appears in the JSON record schema.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Commits => "commits",
            Metric::PullRequestsOpened => "pull_requests_opened",
            Metric::PullRequestsMerged => "pull_requests_merged",
            Metric::Meetings => "meetings",
            Metric::Documentation => "documentation",
        }
    }

    /// Short label used for buttons, table headers and the chart title.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Commits => "Commits",
            Metric::PullRequestsOpened => "PRs Opened",
            Metric::PullRequestsMerged => "PRs Merged",
            Metric::Meetings => "Meetings",
            Metric::Documentation => "Documentation",
        }
    }

    /// Read this metric's count out of a record.
    pub fn value(self, activity: &Activity) -> u64 {
        match self {
            Metric::Commits => activity.commits,
            Metric::PullRequestsOpened => activity.pull_requests_opened,
            Metric::PullRequestsMerged => activity.pull_requests_merged,
            Metric::Meetings => activity.meetings,
            Metric::Documentation => activity.documentation,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Summed activity counts for a single developer across the full record set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeveloperTotals {
    pub name: String,
    pub commits: u64,
    pub pull_requests_opened: u64,
    pub pull_requests_merged: u64,
    pub meetings: u64,
    pub documentation: u64,
}

impl DeveloperTotals {
    /// Read one metric's total.
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Commits => self.commits,
            Metric::PullRequestsOpened => self.pull_requests_opened,
            Metric::PullRequestsMerged => self.pull_requests_merged,
            Metric::Meetings => self.meetings,
            Metric::Documentation => self.documentation,
        }
    }
}
