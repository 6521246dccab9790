use anyhow::Result;
use clap::Parser;

use service_desk::cli::commands::{
    actions::ActionsCommand, check::CheckCommand, show_usage, statuses::StatusesCommand,
    table::TableCommand, tickets::TicketsCommand, Command,
};
use service_desk::cli::{Cli, Commands};
use service_desk::config::{config, ServiceDeskConfig};
use service_desk::telemetry::init_telemetry;
use service_desk::ticket::TicketFilter;
use service_desk::workflow::TransitionRequest;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ServiceDeskConfig::load_from_file(path)?,
        None => config()?.clone(),
    };
    init_telemetry(&settings.observability)?;

    match cli.command {
        None => show_usage(),
        Some(Commands::Table) => TableCommand::new().with_json(cli.json).execute(),
        Some(Commands::Statuses) => StatusesCommand::new().with_json(cli.json).execute(),
        Some(Commands::Actions { status, role }) => ActionsCommand::new(status, role)
            .with_json(cli.json)
            .execute(),
        Some(Commands::Check {
            from,
            to,
            role,
            comment,
        }) => {
            let mut request = TransitionRequest::new(from, to, role);
            request.comment = comment;
            CheckCommand::new(request)
                .with_policy(settings.workflow.comment_policy())
                .with_json(cli.json)
                .execute()
        }
        Some(Commands::Tickets {
            file,
            search,
            statuses,
            role,
        }) => {
            let filter = TicketFilter {
                search,
                status: statuses,
            };
            TicketsCommand::new(file, filter)
                .with_role(role)
                .with_json(cli.json)
                .execute()
        }
    }
}
