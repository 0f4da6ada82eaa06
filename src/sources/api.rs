use crate::config::AppConfig;
use crate::models::dashboard::{AgentCount, StatusCount, TotalCount};
use crate::models::{Dashboard, Inquiry, Listing, ListingId, ListingStatus};
use crate::session::Session;
use crate::sources::error::SourceError;
use crate::sources::traits::ListingSource;
use crate::sources::types::SourceQuery;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the marketplace REST API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host/api`)
    pub fn new(
        base_url: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        Self::new(
            config.api_url.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch a single listing for its detail page
    pub async fn fetch_listing(&self, id: &ListingId) -> Result<Listing, SourceError> {
        let url = self.url(&format!("properties/{}", id));
        debug!("Fetching listing {}", id);
        let response = send(self.client.get(&url)).await?;
        read_json(response, &format!("listing {}", id)).await
    }

    /// Whole catalog including sold listings, as the back-office sees it
    pub async fn fetch_catalog(&self, session: &Session) -> Result<Vec<Listing>, SourceError> {
        let query = SourceQuery {
            include_sold: true,
            ..SourceQuery::default()
        };
        let request = self
            .client
            .get(self.url("properties"))
            .query(&query.params());
        let response = send(authorized(request, session)?).await?;
        read_json(response, "catalog").await
    }

    /// Change the status of a listing (back-office toggle)
    pub async fn update_status(
        &self,
        session: &Session,
        id: &ListingId,
        status: &ListingStatus,
    ) -> Result<(), SourceError> {
        let request = self
            .client
            .put(self.url(&format!("properties/{}", id)))
            .json(&json!({ "status": status.as_str() }));
        send(authorized(request, session)?).await?;
        info!("Listing {} is now {}", id, status);
        Ok(())
    }

    /// Remove a listing from the catalog (back-office)
    pub async fn delete_property(&self, session: &Session, id: &ListingId) -> Result<(), SourceError> {
        let request = self.client.delete(self.url(&format!("properties/{}", id)));
        send(authorized(request, session)?).await?;
        info!("Deleted listing {}", id);
        Ok(())
    }

    /// Send a contact/visit request to the listing's agent
    pub async fn submit_inquiry(&self, session: &Session, inquiry: &Inquiry) -> Result<(), SourceError> {
        let request = self.client.post(self.url("inquiries")).json(inquiry);
        send(authorized(request, session)?).await?;
        info!("Inquiry sent for listing {}", inquiry.property_id);
        Ok(())
    }

    /// Listing counts and top agents for the back-office dashboard
    pub async fn fetch_dashboard(&self, session: &Session) -> Result<Dashboard, SourceError> {
        let (total, by_status, per_agent) = tokio::try_join!(
            self.get_authorized::<TotalCount>(session, "analytics/properties/total"),
            self.get_authorized::<Vec<StatusCount>>(session, "analytics/properties/by-status"),
            self.get_authorized::<Vec<AgentCount>>(session, "analytics/properties/per-agent"),
        )?;
        debug!(
            statuses = by_status.len(),
            agents = per_agent.len(),
            "Loaded dashboard analytics"
        );
        Ok(Dashboard::from_parts(total, &by_status, per_agent))
    }

    async fn get_authorized<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<T, SourceError> {
        let request = authorized(self.client.get(self.url(path)), session)?;
        let response = send(request).await?;
        read_json(response, path).await
    }

    /// Favorites of the signed-in user; empty when signed out
    pub async fn fetch_favorites(&self, session: &Session) -> Result<Vec<Listing>, SourceError> {
        if !session.is_authenticated() {
            debug!("No session, no favorites");
            return Ok(Vec::new());
        }
        let request = self.client.get(self.url("properties/favorites"));
        let response = send(authorized(request, session)?).await?;
        read_json(response, "favorites").await
    }

    /// Favorites used to star search results. A failed lookup is logged and
    /// yields no stars instead of failing the search.
    pub async fn favorites_or_empty(&self, session: &Session) -> Vec<Listing> {
        match self.fetch_favorites(session).await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("Could not load favorites, listing without stars: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn add_favorite(&self, session: &Session, id: &ListingId) -> Result<(), SourceError> {
        let request = self
            .client
            .post(self.url("properties/favorites"))
            .json(&json!({ "propertyId": id }));
        send(authorized(request, session)?).await?;
        debug!("Added favorite {}", id);
        Ok(())
    }

    pub async fn remove_favorite(
        &self,
        session: &Session,
        id: &ListingId,
    ) -> Result<(), SourceError> {
        let request = self
            .client
            .delete(self.url(&format!("properties/favorites/{}", id)));
        send(authorized(request, session)?).await?;
        debug!("Removed favorite {}", id);
        Ok(())
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<Listing>, SourceError> {
        info!("Fetching listings from {}", self.base_url);

        let request = self
            .client
            .get(self.url("properties"))
            .query(&query.params());
        let response = send(request).await?;
        let listings: Vec<Listing> = read_json(response, "listings").await?;

        info!("Fetched {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "marketplace-api"
    }
}

/// Whether `id` is among the user's favorites
pub fn is_favorite(favorites: &[Listing], id: &ListingId) -> bool {
    favorites.iter().any(|favorite| favorite.id.as_ref() == Some(id))
}

fn authorized(request: RequestBuilder, session: &Session) -> Result<RequestBuilder, SourceError> {
    let token = session.bearer().ok_or(SourceError::MissingToken)?;
    Ok(request.bearer_auth(token))
}

async fn send(request: RequestBuilder) -> Result<Response, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    warn!("{} returned status: {}", url, status);
    Err(match status.as_u16() {
        401 | 403 => SourceError::Unauthorized {
            status: status.as_u16(),
        },
        404 => SourceError::NotFound { url },
        other => SourceError::UnexpectedStatus { status: other, url },
    })
}

async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T, SourceError> {
    let body = response.text().await?;
    debug!("Downloaded {} bytes for {}", body.len(), context);
    serde_json::from_str(&body).map_err(|source| SourceError::Deserialize {
        context: context.to_string(),
        source,
    })
}
