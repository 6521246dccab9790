use anyhow::Result;
use tracing::info;

use super::{format_rule, print_json, Command};
use crate::telemetry::{create_transition_span, generate_correlation_id};
use crate::workflow::{catalog, Role, TicketStatus};

pub struct ActionsCommand {
    pub status: TicketStatus,
    pub role: Role,
    pub json: bool,
}

impl ActionsCommand {
    pub fn new(status: TicketStatus, role: Role) -> Self {
        Self {
            status,
            role,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Command for ActionsCommand {
    fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        let span = create_transition_span("actions", self.status, None, self.role, &correlation_id);
        let _enter = span.enter();

        let available = catalog().available_transitions(self.status, self.role);
        info!(count = available.len(), "Listed available transitions");

        if self.json {
            return print_json(&available);
        }

        println!(
            "👉 {} actions from {}:",
            self.role.label(),
            self.status.label()
        );
        if available.is_empty() {
            println!("   🚫 No actions available");
            return Ok(());
        }
        for rule in available {
            println!("   {}", format_rule(rule));
        }
        Ok(())
    }
}
