//! Mapping between [`FilterCriteria`] and the `/listings` query string.

use std::borrow::Cow;
use std::collections::HashMap;

use url::form_urlencoded;

use super::criteria::{Engagement, FilterCriteria};
use crate::models::PropertyType;

pub const LISTINGS_PATH: &str = "/listings";

/// Serialize the non-default dimensions of `criteria`.
///
/// Infinite max bounds are left out, and `equipped` is only written when it
/// is `Some(true)`: a `Some(false)` filter does not survive the trip through
/// the URL and comes back as `None`.
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !criteria.location_text.is_empty() {
        query.append_pair("location", &criteria.location_text);
    }
    append_min(&mut query, "minPrice", criteria.min_price);
    append_max(&mut query, "maxPrice", criteria.max_price);
    append_min(&mut query, "minSurface", criteria.min_surface);
    append_max(&mut query, "maxSurface", criteria.max_surface);
    append_min(&mut query, "minRooms", criteria.min_rooms);
    append_max(&mut query, "maxRooms", criteria.max_rooms);
    if let Some(property_type) = &criteria.property_type {
        query.append_pair("type", property_type.as_str());
    }
    if let Some(engagement) = criteria.engagement {
        query.append_pair("engagement", engagement.as_str());
    }
    if criteria.equipped == Some(true) {
        query.append_pair("equipped", "true");
    }

    query.finish()
}

fn append_min(query: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: u64) {
    if value > 0 {
        query.append_pair(key, &value.to_string());
    }
}

fn append_max(query: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: Option<u64>) {
    if let Some(value) = value {
        query.append_pair(key, &value.to_string());
    }
}

/// Parse a query string (with or without the leading `?`) into criteria.
///
/// Never fails: missing or non-numeric values fall back to the dimension's
/// default. When a key is repeated the first occurrence wins.
pub fn decode(query: &str) -> FilterCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params: HashMap<Cow<'_, str>, Cow<'_, str>> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(key).or_insert(value);
    }
    let get = |key: &str| params.get(key).map(|value| &**value);

    let min = |key: &str| get(key).and_then(parse_leading_integer).unwrap_or(0);
    let max = |key: &str| get(key).and_then(parse_leading_integer);

    FilterCriteria {
        min_price: min("minPrice"),
        max_price: max("maxPrice"),
        min_surface: min("minSurface"),
        max_surface: max("maxSurface"),
        min_rooms: min("minRooms"),
        max_rooms: max("maxRooms"),
        location_text: get("location").unwrap_or_default().to_string(),
        property_type: get("type").and_then(PropertyType::parse),
        engagement: get("engagement").and_then(Engagement::parse),
        equipped: match get("equipped") {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        },
    }
}

/// Navigation target for a set of criteria: `/listings?...`, or the bare
/// path when nothing is constrained.
pub fn listing_path(criteria: &FilterCriteria) -> String {
    let query = encode(criteria);
    if query.is_empty() {
        LISTINGS_PATH.to_string()
    } else {
        format!("{}?{}", LISTINGS_PATH, query)
    }
}

/// Lenient integer parse: leading whitespace, an optional sign, then as many
/// digits as are present. Trailing text is ignored ("120m2" is 120).
/// Negative values clamp to 0 and overlong ones saturate.
pub(crate) fn parse_leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }

    Some(rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_criteria() -> FilterCriteria {
        FilterCriteria {
            min_price: 1_000_000,
            max_price: Some(9_000_000),
            min_surface: 50,
            max_surface: Some(200),
            min_rooms: 2,
            max_rooms: Some(5),
            location_text: "Algiers, Oran".to_string(),
            property_type: Some(PropertyType::Appartement),
            engagement: Some(Engagement::Achat),
            equipped: Some(true),
        }
    }

    #[test]
    fn encodes_only_active_dimensions() {
        assert_eq!(encode(&FilterCriteria::default()), "");

        let criteria = FilterCriteria {
            min_price: 200,
            max_rooms: Some(3),
            ..FilterCriteria::default()
        };
        assert_eq!(encode(&criteria), "minPrice=200&maxRooms=3");
    }

    #[test]
    fn encodes_in_navigation_key_order() {
        assert_eq!(
            encode(&full_criteria()),
            "location=Algiers%2C+Oran&minPrice=1000000&maxPrice=9000000\
             &minSurface=50&maxSurface=200&minRooms=2&maxRooms=5\
             &type=appartement&engagement=achat&equipped=true"
        );
    }

    #[test]
    fn round_trip_preserves_criteria() {
        let criteria = full_criteria();
        assert_eq!(decode(&encode(&criteria)), criteria);

        let zero_max = FilterCriteria {
            max_price: Some(0),
            property_type: Some(PropertyType::Other("Duplex".to_string())),
            ..FilterCriteria::default()
        };
        assert_eq!(decode(&encode(&zero_max)), zero_max);

        let aliased = FilterCriteria {
            property_type: Some(PropertyType::Other("Villa".to_string())),
            ..FilterCriteria::default()
        };
        assert_eq!(decode(&encode(&aliased)), aliased);
    }

    #[test]
    fn equipped_false_does_not_survive_round_trip() {
        let criteria = FilterCriteria {
            equipped: Some(false),
            ..FilterCriteria::default()
        };
        assert_eq!(encode(&criteria), "");
        assert_eq!(decode(&encode(&criteria)).equipped, None);
    }

    #[test]
    fn decodes_equipped_as_tri_state() {
        assert_eq!(decode("equipped=true").equipped, Some(true));
        assert_eq!(decode("equipped=false").equipped, Some(false));
        assert_eq!(decode("equipped=oui").equipped, None);
        assert_eq!(decode("").equipped, None);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let criteria = decode("?minPrice=abc&maxPrice=&minSurface=%20&maxRooms=lots");
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn numbers_parse_leniently() {
        let criteria = decode("minSurface=120m2&maxPrice=+500&minRooms=-3&maxSurface=0");
        assert_eq!(criteria.min_surface, 120);
        assert_eq!(criteria.max_price, Some(500));
        assert_eq!(criteria.min_rooms, 0);
        assert_eq!(criteria.max_surface, Some(0));
        assert_eq!(parse_leading_integer("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn unknown_engagement_and_keys_are_ignored() {
        let criteria = decode("engagement=vente&page=2&type=Villa");
        assert_eq!(criteria.engagement, None);
        assert_eq!(criteria.property_type, Some(PropertyType::Villa));
    }

    #[test]
    fn first_occurrence_wins() {
        let criteria = decode("location=Oran&location=Blida&minPrice=10&minPrice=20");
        assert_eq!(criteria.location_text, "Oran");
        assert_eq!(criteria.min_price, 10);
    }

    #[test]
    fn builds_listing_path() {
        assert_eq!(listing_path(&FilterCriteria::default()), "/listings");
        let criteria = FilterCriteria {
            location_text: "Béjaïa".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(listing_path(&criteria), "/listings?location=B%C3%A9ja%C3%AFa");
    }
}
