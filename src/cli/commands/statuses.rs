use anyhow::Result;
use serde::Serialize;

use super::{print_json, Command};
use crate::workflow::{catalog, TicketStatus};

#[derive(Serialize)]
struct StatusRow {
    status: TicketStatus,
    label: &'static str,
    color: &'static str,
    bg_color: &'static str,
    terminal: bool,
}

pub struct StatusesCommand {
    pub json: bool,
}

impl StatusesCommand {
    pub fn new() -> Self {
        Self { json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Default for StatusesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for StatusesCommand {
    fn execute(&self) -> Result<()> {
        if self.json {
            let rows: Vec<StatusRow> = TicketStatus::ALL
                .into_iter()
                .map(|status| {
                    let display = status.display();
                    StatusRow {
                        status,
                        label: display.label,
                        color: display.color,
                        bg_color: display.bg_color,
                        terminal: status.is_terminal(),
                    }
                })
                .collect();
            return print_json(&rows);
        }

        println!("🏷️  TICKET STATUSES");
        println!("──────────────────");
        for status in TicketStatus::ALL {
            let exits = catalog().outgoing(status).count();
            let marker = if status.is_terminal() { " (reopen only)" } else { "" };
            println!(
                "{:<15} {:<15} {} exit(s){}",
                status.as_str(),
                status.label(),
                exits,
                marker
            );
        }
        Ok(())
    }
}
