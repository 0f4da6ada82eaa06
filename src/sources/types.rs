use crate::filters::FilterCriteria;
use crate::models::PropertyType;

/// Server-side narrowing of the listing collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceQuery {
    /// Only return listings of this type
    pub property_type: Option<PropertyType>,
    /// Include sold listings (back-office only)
    pub include_sold: bool,
}

impl SourceQuery {
    /// Query parameters in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(property_type) = &self.property_type {
            params.push(("type", property_type.as_str().to_string()));
        }
        if self.include_sold {
            params.push(("include_sold", "true".to_string()));
        }
        params
    }
}

impl From<&FilterCriteria> for SourceQuery {
    /// The type dimension is forwarded to the API; the rest is filtered locally.
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            property_type: criteria.property_type.clone(),
            include_sold: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_only_the_type() {
        let criteria = FilterCriteria {
            min_price: 10,
            property_type: Some(PropertyType::Bureau),
            ..FilterCriteria::default()
        };
        let query = SourceQuery::from(&criteria);
        assert_eq!(query.params(), vec![("type", "bureau".to_string())]);
        assert!(SourceQuery::default().params().is_empty());
    }

    #[test]
    fn include_sold_flag() {
        let query = SourceQuery {
            include_sold: true,
            ..SourceQuery::default()
        };
        assert_eq!(query.params(), vec![("include_sold", "true".to_string())]);
    }
}
