use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    /// May dangle after an artist profile disappears; lookups tolerate it.
    pub artist_id: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub featured: bool,
    #[serde(default)]
    pub videos: Vec<String>,
}

impl Artwork {
    #[must_use]
    pub fn new(
        title: String,
        artist_id: String,
        description: String,
        image: String,
        price: f64,
        featured: bool,
    ) -> Self {
        Self {
            id: super::fresh_id("art"),
            title,
            artist_id,
            description,
            image,
            price,
            featured,
            videos: Vec::new(),
        }
    }
}

/// Fallback policy for user-entered prices: anything that does not parse
/// to a finite, non-negative number becomes 0. Kept permissive on purpose;
/// flagged for product review before this ever takes real money.
#[must_use]
pub fn price_or_zero(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_or_zero() {
        assert_eq!(price_or_zero("450"), 450.0);
        assert_eq!(price_or_zero(" 12.5 "), 12.5);
        assert_eq!(price_or_zero("free"), 0.0);
        assert_eq!(price_or_zero(""), 0.0);
        assert_eq!(price_or_zero("-10"), 0.0);
        assert_eq!(price_or_zero("NaN"), 0.0);
    }
}
