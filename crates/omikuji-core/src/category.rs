//! Fortune categories.

use serde::{Deserialize, Serialize};

/// One of the four categories a daily fortune is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General outlook for the day.
    Overall,
    /// Work and career.
    Work,
    /// Love and relationships.
    Love,
    /// Money and finances.
    Money,
}

impl Category {
    /// All categories, in draw order.
    pub const ALL: [Category; 4] = [Self::Overall, Self::Work, Self::Love, Self::Money];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overall => write!(f, "overall"),
            Self::Work => write!(f, "work"),
            Self::Love => write!(f, "love"),
            Self::Money => write!(f, "money"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_four_categories() {
        assert_eq!(Category::ALL.len(), 4);
        assert_eq!(Category::ALL[0], Category::Overall);
        assert_eq!(Category::ALL[3], Category::Money);
    }

    #[test]
    fn display() {
        assert_eq!(Category::Overall.to_string(), "overall");
        assert_eq!(Category::Work.to_string(), "work");
        assert_eq!(Category::Love.to_string(), "love");
        assert_eq!(Category::Money.to_string(), "money");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Love).unwrap();
        assert_eq!(json, "\"love\"");
        let back: Category = serde_json::from_str("\"money\"").unwrap();
        assert_eq!(back, Category::Money);
    }
}
