use rand::rngs::SmallRng;

use crate::config::CardConfig;
use crate::event::{CardEvent, CardOutcome};
use crate::reducer::step;
use crate::rng::{CountingRng, seeded_rng};
use crate::scene::{CardScene, render};
use crate::state::CardState;

/// High-level session wrapper binding config and a seeded RNG to a card state.
#[derive(Debug, Clone)]
pub struct CardSession {
    config: CardConfig,
    seed: u64,
    rng: CountingRng<SmallRng>,
    state: CardState,
    events: u64,
}

impl CardSession {
    /// Fresh session in the config's initial mode.
    #[must_use]
    pub fn new(config: CardConfig, seed: u64) -> Self {
        let state = CardState::with_mode(config.initial_mode);
        Self {
            config,
            seed,
            rng: seeded_rng(seed),
            state,
            events: 0,
        }
    }

    /// Feed one input event through the reducer.
    pub fn dispatch(&mut self, event: CardEvent) -> CardOutcome {
        let current = std::mem::take(&mut self.state);
        let next = step(current, event, &self.config, &mut self.rng);
        self.state = next.state;
        self.events = self.events.saturating_add(1);
        next.outcome
    }

    /// Dispatch a sequence, returning the outcome of each event.
    pub fn dispatch_all<I>(&mut self, events: I) -> Vec<CardOutcome>
    where
        I: IntoIterator<Item = CardEvent>,
    {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }

    #[must_use]
    pub fn scene(&self) -> CardScene {
        render(&self.state, &self.config)
    }

    #[must_use]
    pub const fn state(&self) -> &CardState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &CardConfig {
        &self.config
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Events dispatched since the session began.
    #[must_use]
    pub const fn events_dispatched(&self) -> u64 {
        self.events
    }

    /// Random draws consumed so far.
    #[must_use]
    pub const fn rng_draws(&self) -> u64 {
        self.rng.draws()
    }

    #[must_use]
    pub fn into_state(self) -> CardState {
        self.state
    }
}
