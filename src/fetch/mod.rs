mod http;
#[cfg(test)]
mod tests;

pub use http::{fetch_activities, parse_payload, FetchError};
