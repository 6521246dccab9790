//! Exhaustive checks of the built-in service desk workflow
//!
//! The status and role domains are small enough to walk completely, so these
//! tests cover every pair rather than sampling.

use service_desk::workflow::{
    can_actor_transition, catalog, is_transition_allowed, requires_comment, Role, TicketStatus,
    WorkflowCatalog, DEFAULT_TRANSITIONS,
};
use std::collections::BTreeSet;

#[test]
fn test_every_listed_rule_is_allowed_with_exact_roles() {
    for rule in DEFAULT_TRANSITIONS {
        assert!(is_transition_allowed(rule.from, rule.to));
        assert_eq!(requires_comment(rule.from, rule.to), rule.requires_comment);
        for role in Role::ALL {
            assert_eq!(
                can_actor_transition(rule.from, rule.to, role),
                rule.allowed_roles.contains(role),
                "{:?} {:?} -> {:?}",
                role,
                rule.from,
                rule.to
            );
        }
    }
}

#[test]
fn test_unlisted_pairs_are_denied() {
    let listed: BTreeSet<_> = DEFAULT_TRANSITIONS
        .iter()
        .map(|rule| (rule.from, rule.to))
        .collect();

    let mut unlisted = 0;
    for from in TicketStatus::ALL {
        for to in TicketStatus::ALL {
            if listed.contains(&(from, to)) {
                continue;
            }
            unlisted += 1;
            assert!(!is_transition_allowed(from, to));
            assert!(!requires_comment(from, to));
            for role in Role::ALL {
                assert!(!can_actor_transition(from, to, role));
            }
        }
    }
    assert_eq!(unlisted, 36 - 10);
}

#[test]
fn test_scenarios() {
    use Role::*;
    use TicketStatus::*;

    assert!(can_actor_transition(Open, InProgress, Reviewer));
    assert!(!requires_comment(Open, InProgress));

    assert!(!can_actor_transition(Open, Rejected, Reviewer));

    assert!(can_actor_transition(Closed, Open, Admin));
    assert!(requires_comment(Closed, Open));

    assert!(!can_actor_transition(Closed, Open, Manager));
}

#[test]
fn test_comment_free_path_reaches_closed() {
    let reachable = catalog().reachable_from(TicketStatus::Open, |rule| !rule.requires_comment);
    for status in [
        TicketStatus::InProgress,
        TicketStatus::PendingReview,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ] {
        assert!(reachable.contains(&status), "{status:?} not reachable");
    }
    assert!(!reachable.contains(&TicketStatus::Rejected));
}

#[test]
fn test_terminal_states_only_reopen() {
    for status in [TicketStatus::Closed, TicketStatus::Rejected] {
        let exits: Vec<_> = catalog().outgoing(status).map(|rule| rule.to).collect();
        assert_eq!(exits, vec![TicketStatus::Open]);
        let rule = catalog().rule(status, TicketStatus::Open).unwrap();
        assert_eq!(rule.allowed_roles.iter().collect::<Vec<_>>(), vec![Role::Admin]);
        assert!(rule.requires_comment);
    }
}

#[test]
fn test_viewer_is_read_only() {
    for from in TicketStatus::ALL {
        for to in TicketStatus::ALL {
            assert!(!can_actor_transition(from, to, Role::Viewer));
        }
    }
}

#[test]
fn test_concurrent_queries_agree() {
    let reference = WorkflowCatalog::builtin();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut answers = Vec::new();
                    for from in TicketStatus::ALL {
                        for to in TicketStatus::ALL {
                            for role in Role::ALL {
                                answers.push(can_actor_transition(from, to, role));
                            }
                        }
                    }
                    answers
                })
            })
            .collect();

        let mut expected = Vec::new();
        for from in TicketStatus::ALL {
            for to in TicketStatus::ALL {
                for role in Role::ALL {
                    expected.push(reference.can_actor_transition(from, to, role));
                }
            }
        }

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
