use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

pub mod dashboard;
pub mod inquiry;

pub use dashboard::{AgentRanking, Dashboard};
pub use inquiry::{Inquiry, InquiryError, InquiryForm};

/// Backend identifier of a listing. The API hands out integers, older
/// records carry string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{}", n),
            ListingId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ListingId {
    fn from(value: i64) -> Self {
        ListingId::Number(value)
    }
}

/// Kind of property. Equality ignores case, so `Other("Villa")` and
/// `Villa` are the same type.
#[derive(Debug, Clone, Eq)]
pub enum PropertyType {
    Appartement,
    Villa,
    Bureau,
    Other(String),
}

impl PropertyType {
    /// Parse a type name case-insensitively. Blank input means "no type".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "appartement" => PropertyType::Appartement,
            "villa" => PropertyType::Villa,
            "bureau" => PropertyType::Bureau,
            _ => PropertyType::Other(trimmed.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Appartement => "appartement",
            PropertyType::Villa => "villa",
            PropertyType::Bureau => "bureau",
            PropertyType::Other(name) => name,
        }
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().to_lowercase() == other.as_str().to_lowercase()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Publication status as the backend spells it. Equality ignores case.
#[derive(Debug, Clone, Eq)]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    ForRent,
    Other(String),
}

impl ListingStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "active" => ListingStatus::Active,
            "pending" => ListingStatus::Pending,
            "sold" => ListingStatus::Sold,
            "for rent" => ListingStatus::ForRent,
            _ => ListingStatus::Other(trimmed.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Other(name) => name,
        }
    }

    /// Next status of the back-office quick toggle:
    /// Active -> Pending -> Sold -> For Rent -> Active.
    pub fn next(&self) -> ListingStatus {
        match self {
            ListingStatus::Active => ListingStatus::Pending,
            ListingStatus::Pending => ListingStatus::Sold,
            ListingStatus::Sold => ListingStatus::ForRent,
            ListingStatus::ForRent => ListingStatus::Active,
            ListingStatus::Other(name) => ListingStatus::Other(name.clone()),
        }
    }
}

impl PartialEq for ListingStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().to_lowercase() == other.as_str().to_lowercase()
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ListingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The `equipped` column is a boolean on new records and the string
/// `"oui"` on records imported from the old back-office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Equipped {
    Flag(bool),
    Legacy(String),
}

impl Equipped {
    pub fn is_equipped(&self) -> bool {
        match self {
            Equipped::Flag(flag) => *flag,
            Equipped::Legacy(text) => text == "oui",
        }
    }
}

/// Non-negative quantity from a listing (price, surface, room count).
///
/// Backend values are mostly whole numbers but surfaces such as 85.7 m²
/// occur; the fraction is kept so bound checks compare the exact value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// `None` for negative or non-finite values.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Amount(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole part, for display.
    pub fn whole(self) -> u64 {
        self.0.trunc() as u64
    }

    pub fn at_least(self, min: u64) -> bool {
        self.0 >= min as f64
    }

    pub fn at_most(self, max: u64) -> bool {
        self.0 <= max as f64
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value as f64)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.whole())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Amount {
    /// Whole values are written as integers, as the backend sent them.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 <= u64::MAX as f64 {
            serializer.serialize_u64(self.whole())
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// A property listing as returned by the marketplace API.
///
/// Every field is optional: the backend has accumulated records of several
/// shapes, and a malformed field must never reject the whole collection.
/// Fields this crate does not interpret are kept in `extra` so that a
/// filtered collection serializes back to the same element shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ListingId>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text address, e.g. "Hydra, Algiers"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_property_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<PropertyType>,
    #[serde(default, deserialize_with = "lenient_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    /// Price in DA
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    /// Surface in m²
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_equipped", skip_serializing_if = "Option::is_none")]
    pub equipped: Option<Equipped>,
    #[serde(default, deserialize_with = "lenient_coordinate", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate", skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    /// Price used for bound checks; unknown prices count as 0.
    pub fn price_or_zero(&self) -> Amount {
        self.price.unwrap_or_default()
    }

    pub fn surface_or_zero(&self) -> Amount {
        self.square_footage.unwrap_or_default()
    }

    pub fn rooms_or_zero(&self) -> Amount {
        self.bedrooms.unwrap_or_default()
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped.as_ref().is_some_and(Equipped::is_equipped)
    }

    /// Map position, only when both coordinates are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.long?))
    }
}

/// Non-negative amount out of a JSON number or numeric string; anything
/// else is treated as missing.
pub(crate) fn amount_from_value(value: &Value) -> Option<Amount> {
    match value {
        Value::Number(n) => n.as_f64().and_then(Amount::new),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(Amount::new),
        _ => None,
    }
}

/// Whole count, as the analytics endpoints report them (often as strings).
pub(crate) fn count_from_value(value: &Value) -> Option<u64> {
    amount_from_value(value).map(Amount::whole)
}

fn lenient_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Amount>, D::Error> {
    Ok(amount_from_value(&Value::deserialize(deserializer)?))
}

fn lenient_coordinate<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ListingId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().map(ListingId::Number),
        Value::String(s) if !s.is_empty() => Some(ListingId::Text(s)),
        _ => None,
    })
}

fn lenient_property_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PropertyType>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => PropertyType::parse(&s),
        _ => None,
    })
}

fn lenient_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ListingStatus>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => ListingStatus::parse(&s),
        _ => None,
    })
}

fn lenient_equipped<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Equipped>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(Equipped::Flag(flag)),
        Value::String(text) => Some(Equipped::Legacy(text)),
        _ => None,
    })
}
