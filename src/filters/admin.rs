//! Catalog search of the back-office property table.

use crate::models::{Listing, ListingStatus, PropertyType};

/// Back-office table filter: free-text search over title and location,
/// plus exact status and type selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFilter {
    pub search: String,
    pub status: Option<ListingStatus>,
    pub property_type: Option<PropertyType>,
}

impl AdminFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        self.search_matches(listing)
            && self
                .status
                .as_ref()
                .map_or(true, |status| listing.status.as_ref() == Some(status))
            && self
                .property_type
                .as_ref()
                .map_or(true, |wanted| listing.property_type.as_ref() == Some(wanted))
    }

    fn search_matches(&self, listing: &Listing) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        };
        contains(&listing.title) || contains(&listing.location)
    }

    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect()
    }
}
