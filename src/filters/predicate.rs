use tracing::trace;

use super::criteria::FilterCriteria;
use crate::models::{Amount, Listing};

/// Whether `listing` satisfies every active dimension of `criteria`.
///
/// Missing numeric fields count as 0, so an unpriced listing passes a
/// `maxPrice` bound. Fractional values are compared as they are, so 85.7 m²
/// fails `maxSurface=85`. Missing text fields count as empty.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    location_matches(listing, criteria)
        && within(
            "price",
            listing.price_or_zero(),
            criteria.min_price,
            criteria.max_price,
        )
        && within(
            "surface",
            listing.surface_or_zero(),
            criteria.min_surface,
            criteria.max_surface,
        )
        && within(
            "rooms",
            listing.rooms_or_zero(),
            criteria.min_rooms,
            criteria.max_rooms,
        )
        && type_matches(listing, criteria)
        && engagement_matches(listing, criteria)
        && equipped_matches(listing, criteria)
}

fn within(dimension: &str, value: Amount, min: u64, max: Option<u64>) -> bool {
    let above = value.at_least(min);
    let below = max.map_or(true, |max| value.at_most(max));
    if min > 0 || max.is_some() {
        trace!(
            dimension,
            value = value.value(),
            min,
            ?max,
            matched = above && below,
            "bound check"
        );
    }
    above && below
}

fn location_matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let phrases = criteria.location_phrases();
    if phrases.is_empty() {
        return true;
    }

    let location = listing.location.as_deref().unwrap_or_default().to_lowercase();
    let matched = phrases.iter().any(|phrase| location.contains(phrase.as_str()));
    trace!(location = %location, phrases = ?phrases, matched, "location check");
    matched
}

fn type_matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let Some(wanted) = &criteria.property_type else {
        return true;
    };

    let matched = listing
        .property_type
        .as_ref()
        .is_some_and(|actual| actual == wanted);
    trace!(wanted = %wanted, actual = ?listing.property_type, matched, "type check");
    matched
}

fn engagement_matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let Some(engagement) = criteria.engagement else {
        return true;
    };

    let wanted = engagement.status();
    let matched = listing.status.as_ref() == Some(&wanted);
    trace!(wanted = %wanted, actual = ?listing.status, matched, "status check");
    matched
}

fn equipped_matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let Some(wanted) = criteria.equipped else {
        return true;
    };

    let actual = listing.is_equipped();
    trace!(wanted, actual, "equipped check");
    actual == wanted
}
