use thiserror::Error;

use super::role::Role;
use super::status::TicketStatus;

/// Why a submitted transition request cannot be dispatched. All variants are
/// expected, user-facing outcomes rather than faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Action not available: {from} -> {to}")]
    NotAvailable { from: TicketStatus, to: TicketStatus },
    #[error("Insufficient permission: {role} may not move a ticket from {from} to {to}")]
    InsufficientPermission {
        role: Role,
        from: TicketStatus,
        to: TicketStatus,
    },
    #[error("A comment is required to move a ticket from {from} to {to}")]
    CommentRequired { from: TicketStatus, to: TicketStatus },
}

/// A transition table that breaks one of the catalog invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate rule for {from} -> {to}")]
    DuplicateRule { from: TicketStatus, to: TicketStatus },
    #[error("Self-transition rule for {0}")]
    SelfTransition(TicketStatus),
    #[error("Status {0} has no outgoing rule")]
    NoOutgoingRule(TicketStatus),
    #[error("Status {0} is not reachable from Open")]
    Unreachable(TicketStatus),
}
