use anyhow::Result;
use serde::Serialize;

use crate::workflow::{RoleSet, TransitionRule};

pub mod actions;
pub mod check;
pub mod statuses;
pub mod table;
pub mod tickets;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn format_roles(roles: RoleSet) -> String {
    roles.iter().map(|role| role.as_str()).collect::<Vec<_>>().join(", ")
}

pub(crate) fn format_rule(rule: &TransitionRule) -> String {
    let comment = if rule.requires_comment {
        "💬 comment required"
    } else {
        ""
    };
    format!(
        "{:<15} → {:<15} [{}] {}",
        rule.from.as_str(),
        rule.to.as_str(),
        format_roles(rule.allowed_roles),
        comment
    )
    .trim_end()
    .to_string()
}

pub fn show_usage() -> Result<()> {
    println!("🎫 Service Desk - Ticket Workflow");
    println!();
    println!("Commands:");
    println!("  📋 service-desk table      # Show the transition catalog");
    println!("  🏷️  service-desk statuses   # List ticket statuses");
    println!("  👉 service-desk actions    # What can this role do from here?");
    println!("  ✅ service-desk check      # Validate a transition request");
    println!("  🔎 service-desk tickets    # Filter an exported ticket list");
    println!();
    println!("💡 Start with 'service-desk table' to see every legal transition.");
    Ok(())
}
