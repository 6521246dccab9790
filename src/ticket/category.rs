use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_wire_name, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hardware,
    Software,
    Network,
    Access,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Hardware,
        Category::Software,
        Category::Network,
        Category::Access,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hardware => "hardware",
            Category::Software => "software",
            Category::Network => "network",
            Category::Access => "access",
            Category::Other => "other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Hardware => "computer",
            Category::Software => "apps",
            Category::Network => "wifi",
            Category::Access => "vpn_key",
            Category::Other => "help_outline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Hardware => "Hardware",
            Category::Software => "Software",
            Category::Network => "Network",
            Category::Access => "Access",
            Category::Other => "Other",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_wire_name(s);
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("network".parse::<Category>(), Ok(Category::Network));
        assert_eq!(Category::Access.to_string(), "Access");
        assert_eq!(Category::Access.icon(), "vpn_key");
        assert!("printer".parse::<Category>().is_err());
    }
}
