//! Per-event checks on the card reducer.
//!
//! Each check compares the state before and after one event against the
//! rules the reducer promises, independent of how it implements them.
use thiserror::Error;
use valentine_card::{
    AcceptSource, CardConfig, CardEvent, CardOutcome, CardState, EvasionMode, EvasiveButton,
    Position,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("{len} decoys exceed the cap of {cap}")]
    DecoyCapExceeded { len: usize, cap: usize },
    #[error("position top {top:.2} left {left:.2} lies outside the placement range")]
    PlacementOutOfRange { top: f32, left: f32 },
    #[error("decoy stack order {new} does not exceed {previous}")]
    StackOrderNotIncreasing { previous: u32, new: u32 },
    #[error("rejection count is {actual}, expected {expected}")]
    RejectionCountDrift { expected: u32, actual: u32 },
    #[error("existing decoys changed on {event}")]
    DecoysRewritten { event: &'static str },
    #[error("{event} changed the card while it should have been ignored")]
    UnexpectedChange { event: &'static str },
    #[error("{event} left the card in an unexpected state")]
    WrongTransition { event: &'static str },
    #[error("restart did not produce a fresh card in {expected_mode} mode")]
    IncompleteRestart { expected_mode: &'static str },
    #[error("reported {outcome:?} but the state {changed} change")]
    OutcomeMismatch {
        outcome: CardOutcome,
        changed: &'static str,
    },
}

/// Check one reducer step.
pub fn check_step(
    config: &CardConfig,
    before: &CardState,
    event: CardEvent,
    outcome: CardOutcome,
    after: &CardState,
) -> Result<(), InvariantViolation> {
    if after.decoys.len() > config.max_decoys {
        return Err(InvariantViolation::DecoyCapExceeded {
            len: after.decoys.len(),
            cap: config.max_decoys,
        });
    }
    check_outcome(outcome, before, after)?;

    let label = event.label();
    match event {
        CardEvent::OpenEnvelope => {
            if !after.opened {
                return Err(InvariantViolation::WrongTransition { event: label });
            }
            let expected = CardState {
                opened: true,
                ..before.clone()
            };
            expect_equal(&expected, after, label)
        }
        CardEvent::Accept { source } => {
            let valid = before.is_asking()
                && match source {
                    AcceptSource::Primary => true,
                    AcceptSource::Decoy(index) => index < before.decoys.len(),
                };
            if !valid {
                return unchanged(before, after, label);
            }
            let expected = CardState {
                accepted: true,
                ..before.clone()
            };
            expect_equal(&expected, after, label)
        }
        CardEvent::Reject => check_reject(config, before, after),
        CardEvent::PointerEnterReject => {
            if !before.is_asking() || before.evasion_mode != EvasionMode::Evade {
                return unchanged(before, after, label);
            }
            check_relocation(config, before, after, before.rejection_count, label)
        }
        CardEvent::Restart => {
            let mode = if config.alternate_modes {
                before.evasion_mode.toggled()
            } else {
                before.evasion_mode
            };
            if *after == CardState::with_mode(mode) {
                Ok(())
            } else {
                Err(InvariantViolation::IncompleteRestart {
                    expected_mode: mode.label(),
                })
            }
        }
    }
}

fn check_outcome(
    outcome: CardOutcome,
    before: &CardState,
    after: &CardState,
) -> Result<(), InvariantViolation> {
    let changed = before != after;
    if outcome.changed_state() || !changed {
        return Ok(());
    }
    Err(InvariantViolation::OutcomeMismatch {
        outcome,
        changed: "did",
    })
}

fn check_reject(
    config: &CardConfig,
    before: &CardState,
    after: &CardState,
) -> Result<(), InvariantViolation> {
    let label = CardEvent::Reject.label();
    if !before.is_asking() {
        return unchanged(before, after, label);
    }
    let expected_count = before.rejection_count.saturating_add(1);
    if after.rejection_count != expected_count {
        return Err(InvariantViolation::RejectionCountDrift {
            expected: expected_count,
            actual: after.rejection_count,
        });
    }
    match before.evasion_mode {
        EvasionMode::Spawn => {
            let Some(added) = after.decoys.strip_prefix(before.decoys.as_slice()) else {
                return Err(InvariantViolation::DecoysRewritten { event: label });
            };
            let mut previous = before
                .top_stack_order()
                .unwrap_or(0)
                .max(config.reject_stack_order);
            for decoy in added {
                check_position(config, decoy.position)?;
                if decoy.stack_order <= previous {
                    return Err(InvariantViolation::StackOrderNotIncreasing {
                        previous,
                        new: decoy.stack_order,
                    });
                }
                previous = decoy.stack_order;
            }
            let expected = CardState {
                rejection_count: expected_count,
                decoys: after.decoys.clone(),
                ..before.clone()
            };
            expect_equal(&expected, after, label)
        }
        EvasionMode::Evade => check_relocation(config, before, after, expected_count, label),
    }
}

fn check_relocation(
    config: &CardConfig,
    before: &CardState,
    after: &CardState,
    rejection_count: u32,
    label: &'static str,
) -> Result<(), InvariantViolation> {
    let EvasiveButton::Relocated(position) = after.evasive else {
        return Err(InvariantViolation::WrongTransition { event: label });
    };
    check_position(config, position)?;
    let expected = CardState {
        rejection_count,
        evasive: after.evasive,
        ..before.clone()
    };
    expect_equal(&expected, after, label)
}

fn check_position(config: &CardConfig, position: Position) -> Result<(), InvariantViolation> {
    if config.placement.contains_position(position) {
        Ok(())
    } else {
        Err(InvariantViolation::PlacementOutOfRange {
            top: position.top,
            left: position.left,
        })
    }
}

fn unchanged(
    before: &CardState,
    after: &CardState,
    event: &'static str,
) -> Result<(), InvariantViolation> {
    if before == after {
        Ok(())
    } else {
        Err(InvariantViolation::UnexpectedChange { event })
    }
}

fn expect_equal(
    expected: &CardState,
    after: &CardState,
    event: &'static str,
) -> Result<(), InvariantViolation> {
    if expected == after {
        Ok(())
    } else {
        Err(InvariantViolation::WrongTransition { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_card::{DecoyButton, reduce, seeded_rng};

    fn asking() -> CardState {
        CardState {
            opened: true,
            ..CardState::default()
        }
    }

    #[test]
    fn real_reducer_passes_for_a_reject() {
        let config = CardConfig::default();
        let mut rng = seeded_rng(9);
        let before = asking();
        let after = reduce(before.clone(), CardEvent::Reject, &config, &mut rng);
        let outcome = CardOutcome::Ignored;
        assert!(matches!(
            check_step(&config, &before, CardEvent::Reject, outcome, &after),
            Err(InvariantViolation::OutcomeMismatch { .. })
        ));
        let report = valentine_card::SpawnReport {
            requested: 1,
            added: 1,
            saturated: false,
        };
        let outcome = CardOutcome::DecoysSpawned { report };
        assert_eq!(
            check_step(&config, &before, CardEvent::Reject, outcome, &after),
            Ok(())
        );
    }

    #[test]
    fn flags_decoy_outside_range() {
        let config = CardConfig::default();
        let before = asking();
        let after = CardState {
            rejection_count: 1,
            decoys: vec![DecoyButton {
                position: Position::new(95.0, 50.0),
                stack_order: 1,
            }],
            ..asking()
        };
        let outcome = CardOutcome::Opened;
        assert!(matches!(
            check_step(&config, &before, CardEvent::Reject, outcome, &after),
            Err(InvariantViolation::PlacementOutOfRange { .. })
        ));
    }

    #[test]
    fn flags_non_increasing_stack_order() {
        let config = CardConfig::default();
        let existing = DecoyButton {
            position: Position::new(50.0, 50.0),
            stack_order: 4,
        };
        let before = CardState {
            rejection_count: 1,
            decoys: vec![existing],
            ..asking()
        };
        let after = CardState {
            rejection_count: 2,
            decoys: vec![
                existing,
                DecoyButton {
                    position: Position::new(20.0, 20.0),
                    stack_order: 4,
                },
            ],
            ..asking()
        };
        let err = check_step(&config, &before, CardEvent::Reject, CardOutcome::Opened, &after)
            .unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::StackOrderNotIncreasing {
                previous: 4,
                new: 4
            }
        );
    }

    #[test]
    fn flags_changes_after_acceptance() {
        let config = CardConfig::default();
        let before = CardState {
            accepted: true,
            ..asking()
        };
        let after = CardState {
            rejection_count: 1,
            ..before.clone()
        };
        assert_eq!(
            check_step(&config, &before, CardEvent::Reject, CardOutcome::Opened, &after),
            Err(InvariantViolation::UnexpectedChange { event: "reject" })
        );
    }

    #[test]
    fn flags_partial_restart() {
        let config = CardConfig {
            alternate_modes: true,
            ..CardConfig::default()
        };
        let before = CardState {
            accepted: true,
            ..asking()
        };
        let after = CardState::default();
        assert_eq!(
            check_step(&config, &before, CardEvent::Restart, CardOutcome::Opened, &after),
            Err(InvariantViolation::IncompleteRestart {
                expected_mode: "evade"
            })
        );
    }
}
