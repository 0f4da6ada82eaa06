use crate::models::Listing;
use crate::sources::error::SourceError;
use crate::sources::types::SourceQuery;
use async_trait::async_trait;

/// Anything that can hand back the unfiltered listing collection.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings, optionally narrowed server-side by `query`
    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<Listing>, SourceError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
