use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use super::{print_json, Command};
use crate::ticket::{Ticket, TicketFilter};
use crate::workflow::{catalog, Role, TicketStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketRow<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    sla_deadline: DateTime<Utc>,
    sla_breached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<TicketStatus>>,
}

pub struct TicketsCommand {
    pub file: PathBuf,
    pub filter: TicketFilter,
    pub role: Option<Role>,
    pub json: bool,
}

impl TicketsCommand {
    pub fn new(file: PathBuf, filter: TicketFilter) -> Self {
        Self {
            file,
            filter,
            role: None,
            json: false,
        }
    }

    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn load(&self) -> Result<Vec<Ticket>> {
        let content = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tickets in {}", self.file.display()))
    }

    fn actions_for(&self, ticket: &Ticket) -> Option<Vec<TicketStatus>> {
        self.role.map(|role| {
            ticket
                .available_actions(role, catalog())
                .into_iter()
                .map(|rule| rule.to)
                .collect()
        })
    }
}

impl Command for TicketsCommand {
    fn execute(&self) -> Result<()> {
        let tickets = self.load()?;
        let now = Utc::now();
        let matching = self.filter.apply(&tickets);
        tracing::info!(
            total = tickets.len(),
            matching = matching.len(),
            "Filtered ticket list"
        );

        if self.json {
            let rows: Vec<TicketRow> = matching
                .iter()
                .map(|&ticket| TicketRow {
                    ticket,
                    sla_deadline: ticket.sla_deadline(),
                    sla_breached: ticket.is_sla_breached(now),
                    actions: self.actions_for(ticket),
                })
                .collect();
            return print_json(&rows);
        }

        println!("🎫 {} of {} tickets", matching.len(), tickets.len());
        for ticket in matching {
            let breach = if ticket.is_sla_breached(now) {
                " ⚠️ SLA breached"
            } else {
                ""
            };
            println!(
                "{:<10} {:<15} {:<9} {}{}",
                ticket.id,
                ticket.status.label(),
                ticket.priority.to_string(),
                ticket.title,
                breach
            );
            if let Some(actions) = self.actions_for(ticket) {
                let targets: Vec<&str> = actions.iter().map(|status| status.as_str()).collect();
                if targets.is_empty() {
                    println!("           → no actions");
                } else {
                    println!("           → {}", targets.join(", "));
                }
            }
        }
        Ok(())
    }
}
