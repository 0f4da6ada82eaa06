use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{count_from_value, lenient_text, ListingStatus};

const TOP_AGENTS: usize = 2;
const DEFAULT_AVATAR: &str = "default-avatar.png";
const DEFAULT_BIO: &str = "Aucune bio disponible";

/// Body of `GET /analytics/properties/total`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalCount {
    #[serde(rename = "totalProperties", default, deserialize_with = "lenient_count")]
    pub total_properties: Option<u64>,
}

/// One row of `GET /analytics/properties/by-status`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCount {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<u64>,
}

/// One row of `GET /analytics/properties/per-agent`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentCount {
    #[serde(default, deserialize_with = "lenient_text")]
    pub agentname: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub propertycount: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRanking {
    pub name: String,
    pub avatar: String,
    /// 0 to 5 stars, relative to the busiest agent
    pub rating: u8,
    pub bio: String,
}

/// Back-office summary: listing counts and the two busiest agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub total_properties: u64,
    pub for_sale: u64,
    pub for_rent: u64,
    pub sold: u64,
    pub top_agents: Vec<AgentRanking>,
}

impl Dashboard {
    pub fn from_parts(total: TotalCount, by_status: &[StatusCount], per_agent: Vec<AgentCount>) -> Self {
        Self {
            total_properties: total.total_properties.unwrap_or(0),
            for_sale: count_for(by_status, &ListingStatus::Active),
            for_rent: count_for(by_status, &ListingStatus::ForRent),
            sold: count_for(by_status, &ListingStatus::Sold),
            top_agents: rank_agents(per_agent),
        }
    }
}

/// First row whose status matches, ignoring case; 0 when there is none.
fn count_for(rows: &[StatusCount], status: &ListingStatus) -> u64 {
    rows.iter()
        .find(|row| {
            row.status
                .as_deref()
                .and_then(ListingStatus::parse)
                .is_some_and(|parsed| &parsed == status)
        })
        .and_then(|row| row.count)
        .unwrap_or(0)
}

fn rank_agents(mut agents: Vec<AgentCount>) -> Vec<AgentRanking> {
    agents.sort_by(|a, b| b.propertycount.unwrap_or(0).cmp(&a.propertycount.unwrap_or(0)));
    agents.truncate(TOP_AGENTS);

    let busiest = agents
        .iter()
        .filter_map(|agent| agent.propertycount)
        .max()
        .filter(|max| *max > 0)
        .unwrap_or(1);

    agents
        .into_iter()
        .map(|agent| {
            let count = agent.propertycount.unwrap_or(0);
            let rating = (count as f64 / busiest as f64 * 5.0).round() as u8;
            AgentRanking {
                name: agent.agentname.unwrap_or_default(),
                avatar: agent.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
                rating,
                bio: agent.bio.unwrap_or_else(|| DEFAULT_BIO.to_string()),
            }
        })
        .collect()
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn status_counts_ignore_case_and_default_to_zero() {
        let by_status: Vec<StatusCount> = rows(json!([
            { "status": "ACTIVE", "count": "7" },
            { "status": "for rent", "count": 3 },
            { "status": "Pending", "count": 9 }
        ]));
        let dashboard = Dashboard::from_parts(
            rows(json!({ "totalProperties": 19 })),
            &by_status,
            Vec::new(),
        );
        assert_eq!(dashboard.total_properties, 19);
        assert_eq!(dashboard.for_sale, 7);
        assert_eq!(dashboard.for_rent, 3);
        assert_eq!(dashboard.sold, 0);
        assert!(dashboard.top_agents.is_empty());
    }

    #[test]
    fn missing_total_is_zero() {
        let dashboard = Dashboard::from_parts(rows(json!({})), &[], Vec::new());
        assert_eq!(dashboard.total_properties, 0);
    }

    #[test]
    fn top_two_agents_rated_against_busiest() {
        let per_agent: Vec<AgentCount> = rows(json!([
            { "agentname": "Karim", "propertycount": 3 },
            { "agentname": "Yasmine", "propertycount": "8", "avatar": "y.png", "bio": "Oran" },
            { "agentname": "Sofiane", "propertycount": 5 }
        ]));
        let agents = Dashboard::from_parts(TotalCount::default(), &[], per_agent).top_agents;

        assert_eq!(
            agents,
            vec![
                AgentRanking {
                    name: "Yasmine".to_string(),
                    avatar: "y.png".to_string(),
                    rating: 5,
                    bio: "Oran".to_string(),
                },
                AgentRanking {
                    name: "Sofiane".to_string(),
                    avatar: DEFAULT_AVATAR.to_string(),
                    rating: 3,
                    bio: DEFAULT_BIO.to_string(),
                },
            ]
        );
    }

    #[test]
    fn agents_without_listings_rate_zero() {
        let per_agent: Vec<AgentCount> = rows(json!([{ "agentname": "Nadia", "propertycount": 0 }]));
        let agents = Dashboard::from_parts(TotalCount::default(), &[], per_agent).top_agents;
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].rating, 0);
    }
}
