use std::rc::Rc;

use yew::prelude::*;

use crate::card::{CardConfig, CardEvent, CardOutcome, CardScene, CardSession, CardState};

/// Reducer-backed store holding the card session for the component tree.
#[derive(Debug, Clone)]
pub struct CardStore {
    session: CardSession,
    last_outcome: Option<CardOutcome>,
    /// Bumped on every effective change so effects can key on it.
    revision: u64,
}

impl CardStore {
    #[must_use]
    pub fn new(config: CardConfig, seed: u64) -> Self {
        Self {
            session: CardSession::new(config, seed),
            last_outcome: None,
            revision: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CardState {
        self.session.state()
    }

    #[must_use]
    pub const fn config(&self) -> &CardConfig {
        self.session.config()
    }

    #[must_use]
    pub fn scene(&self) -> CardScene {
        self.session.scene()
    }

    #[must_use]
    pub const fn last_outcome(&self) -> Option<CardOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl PartialEq for CardStore {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.session.state() == other.session.state()
    }
}

impl Reducible for CardStore {
    type Action = CardEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        let outcome = session.dispatch(action);
        if !outcome.changed_state() {
            return self;
        }
        Rc::new(Self {
            session,
            last_outcome: Some(outcome),
            revision: self.revision.wrapping_add(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(store: Rc<CardStore>, events: &[CardEvent]) -> Rc<CardStore> {
        events
            .iter()
            .fold(store, |current, event| current.reduce(*event))
    }

    #[test]
    fn ignored_events_keep_the_same_store() {
        let store = Rc::new(CardStore::new(CardConfig::default(), 1));
        let next = Rc::clone(&store).reduce(CardEvent::Reject);
        assert!(Rc::ptr_eq(&store, &next));
        assert_eq!(next.revision(), 0);
        assert!(next.last_outcome().is_none());
    }

    #[test]
    fn effective_events_bump_revision() {
        let store = Rc::new(CardStore::new(CardConfig::default(), 1));
        let next = apply(store, &[CardEvent::OpenEnvelope, CardEvent::Reject]);
        assert_eq!(next.revision(), 2);
        assert_eq!(next.state().decoys.len(), 1);
        assert!(matches!(
            next.last_outcome(),
            Some(CardOutcome::DecoysSpawned { .. })
        ));
    }
}
