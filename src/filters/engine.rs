use tracing::debug;

use super::criteria::FilterCriteria;
use super::predicate::matches;
use crate::models::Listing;

/// Keep the listings that satisfy `criteria`, in their original order.
///
/// The input is left untouched; each call is an independent pass, so the
/// same collection can be re-filtered whenever the criteria change.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    if criteria.is_unconstrained() {
        debug!(total = listings.len(), "no active filters");
        return listings.to_vec();
    }

    let filtered: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect();

    debug!(
        total = listings.len(),
        matched = filtered.len(),
        "filtered listings"
    );
    filtered
}
