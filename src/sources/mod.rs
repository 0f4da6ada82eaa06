pub mod api;
pub mod error;
pub mod traits;
pub mod types;

pub use api::{is_favorite, ApiClient};
pub use error::SourceError;
pub use traits::ListingSource;
pub use types::SourceQuery;
