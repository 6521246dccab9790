// Ticket records as delivered by the ticket list endpoint

pub mod category;
pub mod filter;
pub mod priority;

pub use category::Category;
pub use filter::TicketFilter;
pub use priority::Priority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::{Role, TicketStatus, TransitionRule, WorkflowCatalog};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn sla_deadline(&self) -> DateTime<Utc> {
        self.created_at + self.priority.sla_window()
    }

    /// Resolved, closed and rejected tickets never breach.
    pub fn is_sla_breached(&self, now: DateTime<Utc>) -> bool {
        !self.status.stops_sla_clock() && now > self.sla_deadline()
    }

    /// Status changes the role can offer for this ticket.
    pub fn available_actions<'a>(
        &self,
        role: Role,
        catalog: &'a WorkflowCatalog,
    ) -> Vec<&'a TransitionRule> {
        catalog.available_transitions(self.status, role)
    }
}
