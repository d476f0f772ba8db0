//! State transitions for every card event.
use rand::Rng;

use crate::config::CardConfig;
use crate::constants::LOG_TARGET_REDUCER;
use crate::decoy::spawn_decoys;
use crate::evasion::relocate;
use crate::event::{AcceptSource, CardEvent, CardOutcome};
use crate::state::{CardState, EvasionMode};

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: CardState,
    pub outcome: CardOutcome,
}

/// Apply `event` and return the next state.
pub fn reduce<R: Rng + ?Sized>(
    state: CardState,
    event: CardEvent,
    config: &CardConfig,
    rng: &mut R,
) -> CardState {
    step(state, event, config, rng).state
}

/// Apply `event`, also reporting what changed.
pub fn step<R: Rng + ?Sized>(
    mut state: CardState,
    event: CardEvent,
    config: &CardConfig,
    rng: &mut R,
) -> Step {
    let outcome = match event {
        CardEvent::OpenEnvelope => open(&mut state),
        CardEvent::Accept { source } => accept(&mut state, source),
        CardEvent::Reject => reject(&mut state, config, rng),
        CardEvent::PointerEnterReject => evade(&mut state, config, rng),
        CardEvent::Restart => restart(&mut state, config),
    };
    log::debug!(
        target: LOG_TARGET_REDUCER,
        "{} -> {outcome:?} (rejections {}, decoys {})",
        event.label(),
        state.rejection_count,
        state.decoys.len()
    );
    Step { state, outcome }
}

fn open(state: &mut CardState) -> CardOutcome {
    if state.opened {
        return CardOutcome::Ignored;
    }
    state.opened = true;
    CardOutcome::Opened
}

fn accept(state: &mut CardState, source: AcceptSource) -> CardOutcome {
    if !state.is_asking() {
        return CardOutcome::Ignored;
    }
    if let AcceptSource::Decoy(index) = source
        && index >= state.decoys.len()
    {
        return CardOutcome::Ignored;
    }
    state.accepted = true;
    CardOutcome::Accepted
}

fn reject<R: Rng + ?Sized>(state: &mut CardState, config: &CardConfig, rng: &mut R) -> CardOutcome {
    if !state.is_asking() {
        return CardOutcome::Ignored;
    }
    let previous = state.rejection_count;
    state.rejection_count = previous.saturating_add(1);
    match state.evasion_mode {
        EvasionMode::Spawn => {
            let report = spawn_decoys(&mut state.decoys, previous, config, rng);
            CardOutcome::DecoysSpawned { report }
        }
        EvasionMode::Evade => relocate_reject(state, config, rng),
    }
}

fn evade<R: Rng + ?Sized>(state: &mut CardState, config: &CardConfig, rng: &mut R) -> CardOutcome {
    if !state.is_asking() || state.evasion_mode != EvasionMode::Evade {
        return CardOutcome::Ignored;
    }
    relocate_reject(state, config, rng)
}

fn relocate_reject<R: Rng + ?Sized>(
    state: &mut CardState,
    config: &CardConfig,
    rng: &mut R,
) -> CardOutcome {
    state.evasive = relocate(state.evasive, config, rng);
    match state.evasive.position() {
        Some(position) => CardOutcome::Relocated { position },
        None => CardOutcome::Ignored,
    }
}

fn restart(state: &mut CardState, config: &CardConfig) -> CardOutcome {
    let mode = if config.alternate_modes {
        state.evasion_mode.toggled()
    } else {
        state.evasion_mode
    };
    *state = CardState::with_mode(mode);
    CardOutcome::Restarted { mode }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BatchPolicy;
    use crate::state::EvasiveButton;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn opened(mode: EvasionMode) -> CardState {
        CardState {
            opened: true,
            ..CardState::with_mode(mode)
        }
    }

    #[test]
    fn open_is_idempotent() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let first = step(CardState::default(), CardEvent::OpenEnvelope, &config, &mut rng);
        assert_eq!(first.outcome, CardOutcome::Opened);
        let second = step(first.state.clone(), CardEvent::OpenEnvelope, &config, &mut rng);
        assert_eq!(second.outcome, CardOutcome::Ignored);
        assert_eq!(second.state, first.state);
    }

    #[test]
    fn accept_requires_open_letter() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let closed = reduce(CardState::default(), CardEvent::ACCEPT_PRIMARY, &config, &mut rng);
        assert!(!closed.accepted);
        let accepted = reduce(opened(EvasionMode::Spawn), CardEvent::ACCEPT_PRIMARY, &config, &mut rng);
        assert!(accepted.accepted);
    }

    #[test]
    fn decoy_accept_checks_index() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let state = reduce(opened(EvasionMode::Spawn), CardEvent::Reject, &config, &mut rng);
        assert_eq!(state.decoys.len(), 1);
        let missing = step(state.clone(), CardEvent::accept_decoy(4), &config, &mut rng);
        assert_eq!(missing.outcome, CardOutcome::Ignored);
        let hit = step(state, CardEvent::accept_decoy(0), &config, &mut rng);
        assert_eq!(hit.outcome, CardOutcome::Accepted);
    }

    #[test]
    fn escalating_rejections_use_prior_count() {
        let config = CardConfig {
            batch: BatchPolicy::Escalating,
            ..CardConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = opened(EvasionMode::Spawn);
        let mut expected = 0;
        for round in 1..=4 {
            state = reduce(state, CardEvent::Reject, &config, &mut rng);
            expected += round;
            assert_eq!(state.rejection_count, round as u32);
            assert_eq!(state.decoys.len(), expected);
        }
    }

    #[test]
    fn hover_only_matters_in_evade_mode() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(4);
        let spawn = step(opened(EvasionMode::Spawn), CardEvent::PointerEnterReject, &config, &mut rng);
        assert_eq!(spawn.outcome, CardOutcome::Ignored);
        assert_eq!(spawn.state.evasive, EvasiveButton::AtRest);

        let evade = step(opened(EvasionMode::Evade), CardEvent::PointerEnterReject, &config, &mut rng);
        assert!(matches!(evade.outcome, CardOutcome::Relocated { .. }));
        assert!(evade.state.evasive.is_relocated());
        assert_eq!(evade.state.rejection_count, 0);
        assert!(evade.state.decoys.is_empty());
    }

    #[test]
    fn reject_click_in_evade_mode_counts_and_relocates() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let next = step(opened(EvasionMode::Evade), CardEvent::Reject, &config, &mut rng);
        assert!(matches!(next.outcome, CardOutcome::Relocated { .. }));
        assert_eq!(next.state.rejection_count, 1);
        assert!(next.state.decoys.is_empty());
    }

    #[test]
    fn restart_keeps_mode_unless_alternating() {
        let mut rng = SmallRng::seed_from_u64(6);
        let fixed = CardConfig::default();
        let kept = reduce(opened(EvasionMode::Evade), CardEvent::Restart, &fixed, &mut rng);
        assert_eq!(kept, CardState::with_mode(EvasionMode::Evade));

        let alternating = CardConfig {
            alternate_modes: true,
            ..CardConfig::default()
        };
        let flipped = step(opened(EvasionMode::Spawn), CardEvent::Restart, &alternating, &mut rng);
        assert_eq!(
            flipped.outcome,
            CardOutcome::Restarted {
                mode: EvasionMode::Evade
            }
        );
        assert!(flipped.state.is_pristine());
    }
}
