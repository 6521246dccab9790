// Service Desk Library - ticket workflow rules for the service desk client
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod ticket;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, init_config, ServiceDeskConfig};
pub use error::ParseError;
pub use telemetry::{create_transition_span, generate_correlation_id, init_telemetry};
pub use ticket::{Category, Priority, Ticket, TicketFilter};
pub use workflow::{
    can_actor_transition, catalog, is_transition_allowed, requires_comment, CatalogError,
    CommentPolicy, Role, RoleSet, TicketStatus, TransitionDecision, TransitionError,
    TransitionRequest, TransitionRule, WorkflowCatalog,
};
