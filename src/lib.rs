//! Search and filtering core of a real-estate marketplace client.
//!
//! Listings come from the marketplace REST API ([`sources`]), search
//! constraints travel in the `/listings` query string
//! ([`filters::query`]), and [`filters::filter_listings`] narrows the
//! collection locally.

pub mod config;
pub mod filters;
pub mod models;
pub mod report;
pub mod session;
pub mod sources;

pub use filters::{filter_listings, FilterCriteria};
pub use models::Listing;
pub use session::Session;
pub use sources::{ApiClient, ListingSource, SourceError, SourceQuery};
