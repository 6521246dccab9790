use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_wire_name, ParseError};

/// Ticket priority levels
/// Higher values = more urgent, shorter SLA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Get the numeric priority value
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Hours allowed before the ticket breaches its SLA
    pub fn sla_hours(self) -> i64 {
        match self {
            Priority::Critical => 4,
            Priority::High => 8,
            Priority::Medium => 24,
            Priority::Low => 72,
        }
    }

    pub fn sla_window(self) -> Duration {
        Duration::hours(self.sla_hours())
    }

    pub fn color(self) -> &'static str {
        match self {
            Priority::Low => "#4CAF50",
            Priority::Medium => "#FF9800",
            Priority::High => "#F44336",
            Priority::Critical => "#B71C1C",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Priority::Low => "arrow_downward",
            Priority::Medium => "remove",
            Priority::High => "arrow_upward",
            Priority::Critical => "priority_high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_wire_name(s);
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownPriority(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values() {
        assert_eq!(Priority::Low.value(), 1);
        assert_eq!(Priority::Medium.value(), 2);
        assert_eq!(Priority::High.value(), 3);
        assert_eq!(Priority::Critical.value(), 4);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_sla_hours() {
        assert_eq!(Priority::Critical.sla_hours(), 4);
        assert_eq!(Priority::High.sla_hours(), 8);
        assert_eq!(Priority::Medium.sla_hours(), 24);
        assert_eq!(Priority::Low.sla_hours(), 72);
        assert_eq!(Priority::High.sla_window(), Duration::hours(8));
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Critical.to_string(), "Critical");
        assert_eq!(Priority::Low.to_string(), "Low");
        assert_eq!(Priority::Critical.icon(), "priority_high");
        assert_eq!(Priority::Medium.color(), "#FF9800");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(ParseError::UnknownPriority("urgent".to_string()))
        );
    }
}
