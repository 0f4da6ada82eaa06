//! Raw search-sidebar input and its conversion into [`FilterCriteria`].

use url::form_urlencoded;

use super::criteria::{Engagement, FilterCriteria};
use super::query::{parse_leading_integer, LISTINGS_PATH};
use super::wilaya;
use crate::models::PropertyType;

/// Parse a number typed with thousands separators ("12,500,000").
pub fn parse_grouped_number(raw: &str) -> Option<u64> {
    parse_leading_integer(&raw.replace(',', ""))
}

/// Render a number with `,` every three digits.
pub fn format_grouped_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Sidebar fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub min_price: String,
    pub max_price: String,
    pub min_surface: String,
    pub max_surface: String,
    pub min_rooms: String,
    pub max_rooms: String,
    /// Number of the wilaya picked in the selector
    pub wilaya: Option<u8>,
    /// Text of the search bar, used when no wilaya is picked
    pub search_text: String,
    pub property_type: String,
    pub engagement: String,
    pub equipped: bool,
}

impl FilterForm {
    /// Empty or unreadable minimums mean 0; empty, unreadable or zero
    /// maximums mean unbounded. The equipped switch only ever narrows.
    pub fn into_criteria(self) -> FilterCriteria {
        let min = |raw: &str| parse_grouped_number(raw).unwrap_or(0);
        let max = |raw: &str| parse_grouped_number(raw).filter(|value| *value > 0);

        let location_text = self
            .wilaya
            .and_then(wilaya::by_number)
            .map(|wilaya| wilaya.name.to_string())
            .unwrap_or(self.search_text);

        FilterCriteria {
            min_price: min(&self.min_price),
            max_price: max(&self.max_price),
            min_surface: min(&self.min_surface),
            max_surface: max(&self.max_surface),
            min_rooms: min(&self.min_rooms),
            max_rooms: max(&self.max_rooms),
            location_text,
            property_type: PropertyType::parse(&self.property_type),
            engagement: Engagement::parse(&self.engagement),
            equipped: self.equipped.then_some(true),
        }
    }
}

/// Navigation target of the plain search bar.
pub fn search_location_path(input: &str) -> String {
    if input.trim().is_empty() {
        return LISTINGS_PATH.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("location", input)
        .finish();
    format!("{}?{}", LISTINGS_PATH, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::query;

    #[test]
    fn grouped_numbers() {
        assert_eq!(parse_grouped_number("12,500,000"), Some(12_500_000));
        assert_eq!(parse_grouped_number(""), None);
        assert_eq!(format_grouped_number(0), "0");
        assert_eq!(format_grouped_number(999), "999");
        assert_eq!(format_grouped_number(1_000), "1,000");
        assert_eq!(format_grouped_number(12_500_000), "12,500,000");
    }

    #[test]
    fn empty_form_is_unconstrained() {
        assert!(FilterForm::default().into_criteria().is_unconstrained());
    }

    #[test]
    fn zero_maximum_means_unbounded() {
        let form = FilterForm {
            min_price: "1,000,000".to_string(),
            max_price: "0".to_string(),
            max_rooms: "abc".to_string(),
            max_surface: "150".to_string(),
            ..FilterForm::default()
        };
        let criteria = form.into_criteria();
        assert_eq!(criteria.min_price, 1_000_000);
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.max_rooms, None);
        assert_eq!(criteria.max_surface, Some(150));
    }

    #[test]
    fn wilaya_takes_precedence_over_search_text() {
        let form = FilterForm {
            wilaya: Some(16),
            search_text: "Oran".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(form.into_criteria().location_text, "Algiers");

        let form = FilterForm {
            wilaya: Some(99),
            search_text: "Oran".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(form.into_criteria().location_text, "Oran");
    }

    #[test]
    fn selectors_and_switch() {
        let form = FilterForm {
            property_type: "villa".to_string(),
            engagement: "location".to_string(),
            equipped: true,
            ..FilterForm::default()
        };
        let criteria = form.into_criteria();
        assert_eq!(criteria.property_type, Some(PropertyType::Villa));
        assert_eq!(criteria.engagement, Some(Engagement::Location));
        assert_eq!(criteria.equipped, Some(true));
        assert_eq!(
            query::listing_path(&criteria),
            "/listings?type=villa&engagement=location&equipped=true"
        );

        let off = FilterForm::default().into_criteria();
        assert_eq!(off.equipped, None);
    }

    #[test]
    fn search_bar_paths() {
        assert_eq!(search_location_path("   "), "/listings");
        assert_eq!(
            search_location_path("Tizi Ouzou"),
            "/listings?location=Tizi+Ouzou"
        );
        let criteria = query::decode("location=Tizi+Ouzou");
        assert_eq!(criteria.location_text, "Tizi Ouzou");
    }
}
