//! Mapping entity: a short code bound to its destination URL.

use chrono::{DateTime, Utc};

/// A persisted short-code mapping.
///
/// Once created, `code`, `destination`, `origin_tag` and `created_at` never
/// change. Only `clicks` moves, and only upward, through the store-level
/// increment issued by the resolver.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub code: String,
    pub destination: String,
    /// Opaque attribution marker recorded at creation. Not used for access
    /// control.
    pub origin_tag: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        code: String,
        destination: String,
        origin_tag: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            destination,
            origin_tag,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `clicks` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub code: String,
    pub destination: String,
    pub origin_tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            "abc23456".to_string(),
            "https://example.com".to_string(),
            "anonymous".to_string(),
            0,
            now,
        );

        assert_eq!(mapping.code, "abc23456");
        assert_eq!(mapping.destination, "https://example.com");
        assert_eq!(mapping.origin_tag, "anonymous");
        assert_eq!(mapping.clicks, 0);
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_mapping_creation() {
        let new_mapping = NewMapping {
            code: "xyz78923".to_string(),
            destination: "https://rust-lang.org".to_string(),
            origin_tag: "import".to_string(),
        };

        assert_eq!(new_mapping.code, "xyz78923");
        assert_eq!(new_mapping.destination, "https://rust-lang.org");
        assert_eq!(new_mapping.origin_tag, "import");
    }
}
