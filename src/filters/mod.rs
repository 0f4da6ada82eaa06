pub mod admin;
pub mod criteria;
pub mod engine;
pub mod form;
pub mod predicate;
pub mod query;
pub mod wilaya;

pub use admin::AdminFilter;
pub use criteria::{Engagement, FilterCriteria};
pub use engine::filter_listings;
pub use form::FilterForm;
pub use predicate::matches;
