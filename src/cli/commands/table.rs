use anyhow::Result;

use super::{format_rule, print_json, Command};
use crate::workflow::{catalog, WorkflowCatalog};

pub struct TableCommand {
    pub json: bool,
}

impl TableCommand {
    pub fn new() -> Self {
        Self { json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn render(&self, catalog: &WorkflowCatalog) -> Result<()> {
        if self.json {
            return print_json(catalog.rules());
        }

        println!("📋 TICKET WORKFLOW ({} transitions)", catalog.len());
        println!("══════════════════════════════════");
        for rule in catalog.rules() {
            println!("{}", format_rule(rule));
        }
        Ok(())
    }
}

impl Default for TableCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for TableCommand {
    fn execute(&self) -> Result<()> {
        self.render(catalog())
    }
}
