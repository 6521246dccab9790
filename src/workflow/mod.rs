// Ticket workflow engine
// Client-side mirror of the server's transition rules, used for gating only

pub mod catalog;
pub mod engine;
pub mod error;
pub mod request;
pub mod role;
pub mod status;

pub use catalog::{TransitionRule, WorkflowCatalog, DEFAULT_TRANSITIONS};
pub use engine::{
    can_actor_transition, catalog, is_transition_allowed, requires_comment, TransitionDecision,
};
pub use error::{CatalogError, TransitionError};
pub use request::{CommentPolicy, TransitionRequest};
pub use role::{Role, RoleSet};
pub use status::{StatusDisplay, TicketStatus};
