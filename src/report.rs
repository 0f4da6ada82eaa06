use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filters::FilterCriteria;
use crate::models::Listing;

/// Outcome of one fetch-and-filter run, written as JSON by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub query: String,
    pub criteria: FilterCriteria,
    pub total: usize,
    pub matched: usize,
    pub listings: Vec<Listing>,
}

impl FilterReport {
    pub fn new(
        source: &str,
        query: &str,
        criteria: FilterCriteria,
        total: usize,
        listings: Vec<Listing>,
    ) -> Self {
        Self {
            fetched_at: Utc::now(),
            source: source.to_string(),
            query: query.to_string(),
            criteria,
            total,
            matched: listings.len(),
            listings,
        }
    }
}
