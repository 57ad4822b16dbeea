//! Menu categories offered as filter choices.
//!
//! Menu records carry their category as free text, so the backend may hold
//! values outside this set. Those records are still shown under
//! [`MenuCategory::All`] but can't be selected on their own.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A filter choice on the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuCategory {
    /// Wildcard: no category constraint.
    #[default]
    All,
    Main,
    Grill,
    Snack,
    Drink,
    Dessert,
}

/// Returned when a category name is not one of [`MenuCategory::ALL`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl MenuCategory {
    /// Every choice, in the order the menu page lists them.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Main,
        Self::Grill,
        Self::Snack,
        Self::Drink,
        Self::Dessert,
    ];

    /// The name stored in `menu_items.category`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Main => "Main",
            Self::Grill => "Grill",
            Self::Snack => "Snack",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record's category field satisfies this choice.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn admits(self, record_category: &str) -> bool {
        self.is_wildcard() || self.as_str() == record_category
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for category in MenuCategory::ALL {
            assert_eq!(category.as_str().parse::<MenuCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "drink".parse::<MenuCategory>(),
            Err(UnknownCategory("drink".to_owned()))
        );
        assert!("Seafood".parse::<MenuCategory>().is_err());
    }

    #[test]
    fn test_admits() {
        assert!(MenuCategory::All.admits("Seafood"));
        assert!(MenuCategory::Drink.admits("Drink"));
        assert!(!MenuCategory::Drink.admits("drink"));
        assert!(!MenuCategory::Drink.admits("Drinks"));
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&MenuCategory::Dessert).unwrap(),
            "\"Dessert\""
        );
    }
}
