use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::WorkflowCatalog;
use super::engine::TransitionDecision;
use super::error::TransitionError;
use super::role::Role;
use super::status::TicketStatus;

/// What counts as a comment when a rule demands one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentPolicy {
    /// The comment must contain something other than whitespace.
    #[default]
    NonBlank,
    /// Any supplied comment is accepted, even an empty one.
    Present,
}

impl CommentPolicy {
    pub fn from_require_nonblank(require_nonblank: bool) -> Self {
        if require_nonblank {
            CommentPolicy::NonBlank
        } else {
            CommentPolicy::Present
        }
    }

    pub fn is_satisfied_by(self, comment: Option<&str>) -> bool {
        match (self, comment) {
            (_, None) => false,
            (CommentPolicy::Present, Some(_)) => true,
            (CommentPolicy::NonBlank, Some(text)) => !text.trim().is_empty(),
        }
    }
}

/// A status change submitted from the UI, checked before it is dispatched to
/// the ticket update endpoint. The server remains the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub from: TicketStatus,
    pub to: TicketStatus,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TransitionRequest {
    pub fn new(from: TicketStatus, to: TicketStatus, role: Role) -> Self {
        Self {
            from,
            to,
            role,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn validate(&self, catalog: &WorkflowCatalog) -> Result<(), TransitionError> {
        self.validate_with_policy(catalog, CommentPolicy::default())
    }

    /// Checks legality, then permission, then the comment requirement.
    pub fn validate_with_policy(
        &self,
        catalog: &WorkflowCatalog,
        policy: CommentPolicy,
    ) -> Result<(), TransitionError> {
        let (from, to, role) = (self.from, self.to, self.role);

        match catalog.evaluate(from, to, role) {
            TransitionDecision::NotAvailable => Err(TransitionError::NotAvailable { from, to }),
            TransitionDecision::InsufficientPermission => {
                Err(TransitionError::InsufficientPermission { role, from, to })
            }
            TransitionDecision::Allowed { requires_comment } => {
                if requires_comment && !policy.is_satisfied_by(self.comment.as_deref()) {
                    return Err(TransitionError::CommentRequired { from, to });
                }
                debug!(
                    from = from.as_str(),
                    to = to.as_str(),
                    role = role.as_str(),
                    "Transition request validated"
                );
                Ok(())
            }
        }
    }
}
