use crate::models::{ListingStatus, PropertyType};
use serde::Serialize;

/// Buying or renting, as chosen in the search sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    Achat,
    Location,
}

impl Engagement {
    /// Unrecognized values yield `None`, which imposes no constraint.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "achat" => Some(Engagement::Achat),
            "location" => Some(Engagement::Location),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Engagement::Achat => "achat",
            Engagement::Location => "location",
        }
    }

    /// Backend status a listing must carry for this engagement.
    pub fn status(&self) -> ListingStatus {
        match self {
            Engagement::Achat => ListingStatus::Active,
            Engagement::Location => ListingStatus::ForRent,
        }
    }
}

/// One complete set of search constraints.
///
/// Every dimension is independent and its default means "no constraint".
/// A max bound of `None` stands for +infinity. Inverted pairs are allowed
/// and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub min_price: u64,
    pub max_price: Option<u64>,
    pub min_surface: u64,
    pub max_surface: Option<u64>,
    pub min_rooms: u64,
    pub max_rooms: Option<u64>,
    /// Comma-separated phrases, any of which may match
    pub location_text: String,
    pub property_type: Option<PropertyType>,
    pub engagement: Option<Engagement>,
    /// `None` leaves the equipped flag unfiltered
    pub equipped: Option<bool>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Trimmed, lower-cased location phrases; blanks are dropped.
    pub fn location_phrases(&self) -> Vec<String> {
        self.location_text
            .split(',')
            .map(|phrase| phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.min_rooms, 0);
        assert_eq!(criteria.equipped, None);

        let narrowed = FilterCriteria {
            equipped: Some(false),
            ..FilterCriteria::default()
        };
        assert!(!narrowed.is_unconstrained());
    }

    #[test]
    fn engagement_maps_to_backend_status() {
        assert_eq!(Engagement::Achat.status(), ListingStatus::Active);
        assert_eq!(Engagement::Location.status(), ListingStatus::ForRent);
        assert_eq!(Engagement::parse("location"), Some(Engagement::Location));
        assert_eq!(Engagement::parse("vente"), None);
    }

    #[test]
    fn location_phrases_are_normalized() {
        let criteria = FilterCriteria {
            location_text: " Algiers , ORAN,, ,Tizi Ouzou".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(
            criteria.location_phrases(),
            vec!["algiers", "oran", "tizi ouzou"]
        );

        let blank = FilterCriteria {
            location_text: " , ,".to_string(),
            ..FilterCriteria::default()
        };
        assert!(blank.location_phrases().is_empty());
    }
}
