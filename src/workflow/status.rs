use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_wire_name, ParseError};

/// Ticket lifecycle states. The discriminants double as dense indices into
/// the catalog's lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open = 0,
    InProgress = 1,
    PendingReview = 2,
    Resolved = 3,
    Closed = 4,
    Rejected = 5,
}

/// Label and colors used when a status is shown as a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

impl TicketStatus {
    pub const COUNT: usize = 6;

    pub const ALL: [TicketStatus; Self::COUNT] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::PendingReview,
        TicketStatus::Resolved,
        TicketStatus::Closed,
        TicketStatus::Rejected,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name, as sent by the ticket API.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::PendingReview => "pending_review",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
            TicketStatus::Rejected => "rejected",
        }
    }

    pub fn display(self) -> StatusDisplay {
        let (label, color, bg_color) = match self {
            TicketStatus::Open => ("Open", "#1565C0", "#E3F2FD"),
            TicketStatus::InProgress => ("In Progress", "#F57C00", "#FFF3E0"),
            TicketStatus::PendingReview => ("Pending Review", "#7B1FA2", "#F3E5F5"),
            TicketStatus::Resolved => ("Resolved", "#388E3C", "#E8F5E9"),
            TicketStatus::Closed => ("Closed", "#455A64", "#ECEFF1"),
            TicketStatus::Rejected => ("Rejected", "#C62828", "#FFEBEE"),
        };
        StatusDisplay { label, color, bg_color }
    }

    pub fn label(self) -> &'static str {
        self.display().label
    }

    /// Closed and rejected tickets only leave their state through a reopen.
    pub fn is_terminal(self) -> bool {
        matches!(self, TicketStatus::Closed | TicketStatus::Rejected)
    }

    /// Whether SLA tracking stops once a ticket reaches this status.
    pub fn stops_sla_clock(self) -> bool {
        self.is_terminal() || self == TicketStatus::Resolved
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_wire_name(s);
        TicketStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}
