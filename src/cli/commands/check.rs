use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use super::{print_json, Command};
use crate::telemetry::{create_transition_span, generate_correlation_id};
use crate::workflow::{catalog, CommentPolicy, TransitionError, TransitionRequest};

#[derive(Serialize)]
struct CheckReport<'a> {
    request: &'a TransitionRequest,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub struct CheckCommand {
    pub request: TransitionRequest,
    pub policy: CommentPolicy,
    pub json: bool,
}

impl CheckCommand {
    pub fn new(request: TransitionRequest) -> Self {
        Self {
            request,
            policy: CommentPolicy::default(),
            json: false,
        }
    }

    pub fn with_policy(mut self, policy: CommentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn report(&self, result: &Result<(), TransitionError>) -> Result<()> {
        if self.json {
            return print_json(&CheckReport {
                request: &self.request,
                allowed: result.is_ok(),
                error: result.as_ref().err().map(ToString::to_string),
            });
        }

        let (from, to) = (self.request.from, self.request.to);
        match result {
            Ok(()) => {
                println!("✅ Allowed: {} → {}", from.label(), to.label());
                if catalog().requires_comment(from, to) {
                    println!("   💬 Comment attached");
                }
            }
            Err(e) => println!("❌ {e}"),
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        let span = create_transition_span(
            "check",
            self.request.from,
            Some(self.request.to),
            self.request.role,
            &correlation_id,
        );
        let _enter = span.enter();

        let result = self.request.validate_with_policy(catalog(), self.policy);
        match &result {
            Ok(()) => info!("Transition request accepted"),
            Err(e) => warn!(reason = %e, "Transition request rejected"),
        }

        self.report(&result)?;
        result.map_err(Into::into)
    }
}
