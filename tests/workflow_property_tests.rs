// Property-Based Testing for the Ticket Workflow
// Checks the engine against the literal transition table for arbitrary queries

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use service_desk::workflow::{
    can_actor_transition, catalog, is_transition_allowed, requires_comment, CommentPolicy, Role,
    TicketStatus, TransitionDecision, TransitionError, TransitionRequest, TransitionRule,
    DEFAULT_TRANSITIONS,
};

fn status_strategy() -> impl Strategy<Value = TicketStatus> {
    prop::sample::select(TicketStatus::ALL.to_vec())
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

#[derive(Debug, Clone, Arbitrary)]
struct TransitionQuery {
    #[proptest(strategy = "status_strategy()")]
    from: TicketStatus,
    #[proptest(strategy = "status_strategy()")]
    to: TicketStatus,
    #[proptest(strategy = "role_strategy()")]
    role: Role,
    #[proptest(strategy = "proptest::option::of(\"[ a-z]{0,12}\")")]
    comment: Option<String>,
}

fn table_rule(from: TicketStatus, to: TicketStatus) -> Option<&'static TransitionRule> {
    DEFAULT_TRANSITIONS
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

proptest! {
    #[test]
    fn legality_matches_table(query in any::<TransitionQuery>()) {
        let expected = table_rule(query.from, query.to).is_some();
        prop_assert_eq!(is_transition_allowed(query.from, query.to), expected);
    }

    #[test]
    fn actor_permission_matches_table(query in any::<TransitionQuery>()) {
        let expected = table_rule(query.from, query.to)
            .is_some_and(|rule| rule.allowed_roles.contains(query.role));
        prop_assert_eq!(can_actor_transition(query.from, query.to, query.role), expected);
    }

    #[test]
    fn comment_flag_matches_table(query in any::<TransitionQuery>()) {
        let expected = table_rule(query.from, query.to).is_some_and(|rule| rule.requires_comment);
        prop_assert_eq!(requires_comment(query.from, query.to), expected);
    }

    #[test]
    fn evaluate_agrees_with_boolean_queries(query in any::<TransitionQuery>()) {
        let (from, to, role) = (query.from, query.to, query.role);
        let decision = catalog().evaluate(from, to, role);

        prop_assert_eq!(decision.is_allowed(), can_actor_transition(from, to, role));
        match decision {
            TransitionDecision::NotAvailable => prop_assert!(!is_transition_allowed(from, to)),
            TransitionDecision::InsufficientPermission => {
                prop_assert!(is_transition_allowed(from, to));
                prop_assert!(!can_actor_transition(from, to, role));
            }
            TransitionDecision::Allowed { requires_comment: needs } => {
                prop_assert_eq!(needs, requires_comment(from, to));
            }
        }
    }

    #[test]
    fn validation_accepts_exactly_what_engine_permits(query in any::<TransitionQuery>()) {
        let request = TransitionRequest {
            from: query.from,
            to: query.to,
            role: query.role,
            comment: query.comment.clone(),
        };
        let result = request.validate(catalog());
        let permitted = can_actor_transition(query.from, query.to, query.role);
        let comment_ok = !requires_comment(query.from, query.to)
            || CommentPolicy::NonBlank.is_satisfied_by(query.comment.as_deref());

        prop_assert_eq!(result.is_ok(), permitted && comment_ok);
        if permitted && !comment_ok {
            prop_assert_eq!(
                result,
                Err(TransitionError::CommentRequired { from: query.from, to: query.to })
            );
        }
    }

    #[test]
    fn wire_names_round_trip(status in status_strategy(), role in role_strategy()) {
        prop_assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        prop_assert_eq!(status.as_str().to_uppercase().parse::<TicketStatus>(), Ok(status));
        prop_assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}
