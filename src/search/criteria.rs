// src/search/criteria.rs
use url::form_urlencoded;

/// Upper end of the price slider.
pub const DEFAULT_MAX_PRICE: f64 = 20_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    Distance,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Distance => "distance",
        }
    }

    fn parse(value: &str) -> Option<SortKey> {
        match value.trim().to_ascii_lowercase().as_str() {
            "price" => Some(SortKey::Price),
            "distance" => Some(SortKey::Distance),
            _ => None,
        }
    }
}

/// Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub query: String,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl SearchCriteria {
    /// Reads `q`, `min`, `max` and `sort` from a URL query string.
    /// Missing or unparsable values keep their defaults.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut c = SearchCriteria::default();
        let Some(raw) = raw else {
            return c;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "q" => c.query = value.into_owned(),
                "min" => {
                    if let Some(v) = parse_price(&value) {
                        c.price.min = v;
                    }
                }
                "max" => {
                    if let Some(v) = parse_price(&value) {
                        c.price.max = v;
                    }
                }
                "sort" => {
                    if let Some(s) = SortKey::parse(&value) {
                        c.sort = s;
                    }
                }
                _ => {}
            }
        }

        c
    }

    /// Inverse of `from_query`, used for links that carry the current view.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.query)
            .append_pair("min", &self.price.min.to_string())
            .append_pair("max", &self.price.max.to_string())
            .append_pair("sort", self.sort.as_str())
            .finish()
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
