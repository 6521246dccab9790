// Transition catalog - the fixed table of legal ticket status changes
// Built once, indexed by (from, to), never mutated afterwards

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use super::error::CatalogError;
use super::role::{Role, RoleSet};
use super::status::TicketStatus;

/// A single legal status change and who may perform it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRule {
    pub from: TicketStatus,
    pub to: TicketStatus,
    pub allowed_roles: RoleSet,
    pub requires_comment: bool,
}

impl TransitionRule {
    pub const fn new(
        from: TicketStatus,
        to: TicketStatus,
        allowed_roles: &[Role],
        requires_comment: bool,
    ) -> Self {
        Self {
            from,
            to,
            allowed_roles: RoleSet::of(allowed_roles),
            requires_comment,
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(role)
    }
}

use Role::{Admin, Manager, Reviewer};
use TicketStatus::{Closed, InProgress, Open, PendingReview, Rejected, Resolved};

/// The service desk workflow, in display order.
pub const DEFAULT_TRANSITIONS: [TransitionRule; 10] = [
    // Open
    TransitionRule::new(Open, InProgress, &[Admin, Manager, Reviewer], false),
    TransitionRule::new(Open, Rejected, &[Admin, Manager], true),
    // In progress
    TransitionRule::new(InProgress, PendingReview, &[Admin, Manager, Reviewer], false),
    TransitionRule::new(InProgress, Open, &[Admin, Manager], true),
    // Pending review
    TransitionRule::new(PendingReview, Resolved, &[Admin, Manager], false),
    TransitionRule::new(PendingReview, InProgress, &[Admin, Manager, Reviewer], true),
    // Resolved
    TransitionRule::new(Resolved, Closed, &[Admin, Manager], false),
    TransitionRule::new(Resolved, InProgress, &[Admin, Manager], true),
    // Reopen paths
    TransitionRule::new(Closed, Open, &[Admin], true),
    TransitionRule::new(Rejected, Open, &[Admin], true),
];

type RuleIndex = [[Option<usize>; TicketStatus::COUNT]; TicketStatus::COUNT];

/// Ordered, read-only set of transition rules with O(1) lookup by pair.
#[derive(Debug, Clone)]
pub struct WorkflowCatalog {
    rules: Vec<TransitionRule>,
    index: RuleIndex,
}

impl WorkflowCatalog {
    /// Build a catalog from an arbitrary rule table, rejecting tables that
    /// contain duplicates, self-transitions, dead-end or unreachable statuses.
    pub fn new(rules: impl IntoIterator<Item = TransitionRule>) -> Result<Self, CatalogError> {
        let rules: Vec<TransitionRule> = rules.into_iter().collect();
        let mut index: RuleIndex = [[None; TicketStatus::COUNT]; TicketStatus::COUNT];

        for (position, rule) in rules.iter().enumerate() {
            if rule.from == rule.to {
                return Err(CatalogError::SelfTransition(rule.from));
            }
            let slot = &mut index[rule.from.index()][rule.to.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateRule {
                    from: rule.from,
                    to: rule.to,
                });
            }
            *slot = Some(position);
        }

        let catalog = Self { rules, index };

        for status in TicketStatus::ALL {
            if catalog.outgoing(status).next().is_none() {
                return Err(CatalogError::NoOutgoingRule(status));
            }
        }

        let reachable = catalog.reachable_from(TicketStatus::Open, |_| true);
        if let Some(status) = TicketStatus::ALL
            .into_iter()
            .find(|status| !reachable.contains(status))
        {
            return Err(CatalogError::Unreachable(status));
        }

        Ok(catalog)
    }

    /// The built-in service desk workflow.
    pub fn builtin() -> Self {
        let rules = DEFAULT_TRANSITIONS.to_vec();
        let mut index: RuleIndex = [[None; TicketStatus::COUNT]; TicketStatus::COUNT];
        for (position, rule) in rules.iter().enumerate() {
            index[rule.from.index()][rule.to.index()] = Some(position);
        }
        tracing::debug!(rules = rules.len(), "Built workflow catalog");
        Self { rules, index }
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn lookup(&self, from: TicketStatus, to: TicketStatus) -> Option<&TransitionRule> {
        self.index[from.index()][to.index()].map(|position| &self.rules[position])
    }

    /// Rules leaving `from`, in catalog order.
    pub fn outgoing(&self, from: TicketStatus) -> impl Iterator<Item = &TransitionRule> {
        self.rules.iter().filter(move |rule| rule.from == from)
    }

    /// Statuses reachable from `start` following only rules accepted by
    /// `follow`. Always contains `start`.
    pub fn reachable_from<F>(&self, start: TicketStatus, follow: F) -> BTreeSet<TicketStatus>
    where
        F: Fn(&TransitionRule) -> bool,
    {
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(status) = queue.pop_front() {
            for rule in self.outgoing(status).filter(|&rule| follow(rule)) {
                if seen.insert(rule.to) {
                    queue.push_back(rule.to);
                }
            }
        }

        seen
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
