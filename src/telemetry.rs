use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;
use crate::workflow::{Role, TicketStatus};

/// Initialize structured logging on stderr, leaving stdout for command output.
/// RUST_LOG takes precedence over the configured level.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    tracing::debug!("Service desk telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span carrying the attributes of a transition being checked
pub fn create_transition_span(
    operation: &str,
    from: TicketStatus,
    to: Option<TicketStatus>,
    role: Role,
    correlation_id: &str,
) -> tracing::Span {
    tracing::info_span!(
        "ticket_transition",
        operation = operation,
        ticket.from = from.as_str(),
        ticket.to = to.map(TicketStatus::as_str),
        actor.role = role.as_str(),
        correlation.id = correlation_id,
    )
}
