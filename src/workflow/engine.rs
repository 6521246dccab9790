use serde::Serialize;
use std::sync::LazyLock;

use super::catalog::{TransitionRule, WorkflowCatalog};
use super::role::Role;
use super::status::TicketStatus;

/// Outcome of evaluating a status change for a given actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionDecision {
    Allowed { requires_comment: bool },
    /// No rule exists for the pair.
    NotAvailable,
    /// A rule exists but the role is not in its allowed set.
    InsufficientPermission,
}

impl TransitionDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, TransitionDecision::Allowed { .. })
    }
}

impl WorkflowCatalog {
    pub fn rule(&self, from: TicketStatus, to: TicketStatus) -> Option<&TransitionRule> {
        self.lookup(from, to)
    }

    /// Whether the change is legal for anyone at all.
    pub fn is_transition_allowed(&self, from: TicketStatus, to: TicketStatus) -> bool {
        self.lookup(from, to).is_some()
    }

    pub fn can_actor_transition(&self, from: TicketStatus, to: TicketStatus, role: Role) -> bool {
        self.lookup(from, to).is_some_and(|rule| rule.permits(role))
    }

    /// False for pairs without a rule; callers check legality first.
    pub fn requires_comment(&self, from: TicketStatus, to: TicketStatus) -> bool {
        self.lookup(from, to).is_some_and(|rule| rule.requires_comment)
    }

    /// Transitions the role may start from `from`, in catalog order.
    pub fn available_transitions(&self, from: TicketStatus, role: Role) -> Vec<&TransitionRule> {
        self.outgoing(from).filter(|rule| rule.permits(role)).collect()
    }

    pub fn evaluate(&self, from: TicketStatus, to: TicketStatus, role: Role) -> TransitionDecision {
        match self.lookup(from, to) {
            None => TransitionDecision::NotAvailable,
            Some(rule) if !rule.permits(role) => TransitionDecision::InsufficientPermission,
            Some(rule) => TransitionDecision::Allowed {
                requires_comment: rule.requires_comment,
            },
        }
    }
}

static CATALOG: LazyLock<WorkflowCatalog> = LazyLock::new(WorkflowCatalog::builtin);

/// Process-wide catalog, built on first use.
pub fn catalog() -> &'static WorkflowCatalog {
    &CATALOG
}

pub fn is_transition_allowed(from: TicketStatus, to: TicketStatus) -> bool {
    catalog().is_transition_allowed(from, to)
}

pub fn can_actor_transition(from: TicketStatus, to: TicketStatus, role: Role) -> bool {
    catalog().can_actor_transition(from, to, role)
}

pub fn requires_comment(from: TicketStatus, to: TicketStatus) -> bool {
    catalog().requires_comment(from, to)
}
