use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::workflow::{Role, TicketStatus};

pub mod commands;

#[derive(Parser)]
#[command(name = "service-desk")]
#[command(about = "IT service desk ticket workflow")]
#[command(long_about = "Query the ticket workflow: which status changes exist, who may perform them, \
                       and which ones need a justification comment. Start with 'service-desk table' \
                       to see the full transition catalog.")]
pub struct Cli {
    /// Read configuration from this TOML file instead of the default sources
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every legal transition with its allowed roles
    Table,
    /// List ticket statuses with their display labels
    Statuses,
    /// List the transitions a role can start from a status
    Actions {
        /// Current ticket status
        #[arg(long, help = "Current status, e.g. open, in_progress")]
        status: TicketStatus,
        /// Acting role
        #[arg(long, help = "Role of the acting user: admin, manager, reviewer, viewer")]
        role: Role,
    },
    /// Validate a transition request before it is submitted
    Check {
        /// Current ticket status
        #[arg(long, help = "Status the ticket is in now")]
        from: TicketStatus,
        /// Requested status
        #[arg(long, help = "Status the ticket should move to")]
        to: TicketStatus,
        /// Acting role
        #[arg(long, help = "Role of the acting user")]
        role: Role,
        /// Justification comment
        #[arg(long, help = "Comment to attach to the transition")]
        comment: Option<String>,
    },
    /// Filter a ticket list exported as JSON
    Tickets {
        /// JSON file containing an array of tickets
        #[arg(long, help = "Path to a JSON array of tickets")]
        file: PathBuf,
        /// Case-insensitive text to look for in id or title
        #[arg(long, help = "Search text matched against ticket id and title")]
        search: Option<String>,
        /// Restrict to these statuses (repeatable)
        #[arg(long = "status", help = "Only show tickets in this status (repeatable)")]
        statuses: Vec<TicketStatus>,
        /// Show the actions available to this role
        #[arg(long, help = "Show available actions for this role")]
        role: Option<Role>,
    },
}
