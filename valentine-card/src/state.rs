use serde::{Deserialize, Serialize};

use crate::position::Position;

/// How the rejection control behaves for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvasionMode {
    /// Each rejection spawns a batch of decoy accept buttons.
    #[default]
    Spawn,
    /// The rejection control jumps away whenever the pointer reaches it.
    Evade,
}

impl EvasionMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Spawn => Self::Evade,
            Self::Evade => Self::Spawn,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spawn => "spawn",
            Self::Evade => "evade",
        }
    }
}

/// Placement of the rejection control.
///
/// `AtRest` keeps it in normal document flow next to the primary accept
/// button. Once relocated it stays absolutely positioned until restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "position", rename_all = "snake_case")]
pub enum EvasiveButton {
    #[default]
    AtRest,
    Relocated(Position),
}

impl EvasiveButton {
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::AtRest => None,
            Self::Relocated(position) => Some(*position),
        }
    }

    #[must_use]
    pub const fn is_relocated(&self) -> bool {
        matches!(self, Self::Relocated(_))
    }
}

/// An extra accept button dropped somewhere on the letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecoyButton {
    pub position: Position,
    /// Paint order; higher values paint above lower ones.
    pub stack_order: u32,
}

/// Everything the card remembers during one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardState {
    pub opened: bool,
    pub accepted: bool,
    pub rejection_count: u32,
    pub decoys: Vec<DecoyButton>,
    pub evasion_mode: EvasionMode,
    pub evasive: EvasiveButton,
}

impl CardState {
    /// Fresh state for a session starting in `mode`.
    #[must_use]
    pub fn with_mode(mode: EvasionMode) -> Self {
        Self {
            evasion_mode: mode,
            ..Self::default()
        }
    }

    /// Whether the question is on screen and still waiting for an answer.
    #[must_use]
    pub const fn is_asking(&self) -> bool {
        self.opened && !self.accepted
    }

    /// Decoys are only ever shown while the question is open.
    #[must_use]
    pub fn visible_decoys(&self) -> &[DecoyButton] {
        if self.is_asking() { &self.decoys } else { &[] }
    }

    /// Highest stack order handed out so far, if any decoy exists.
    #[must_use]
    pub fn top_stack_order(&self) -> Option<u32> {
        self.decoys.iter().map(|decoy| decoy.stack_order).max()
    }

    /// Equal to a fresh session, ignoring which mode it runs in.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        !self.opened
            && !self.accepted
            && self.rejection_count == 0
            && self.decoys.is_empty()
            && self.evasive == EvasiveButton::AtRest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_pristine_spawn_session() {
        let state = CardState::default();
        assert!(state.is_pristine());
        assert_eq!(state.evasion_mode, EvasionMode::Spawn);
        assert!(!state.is_asking());
    }

    #[test]
    fn decoys_hidden_outside_question() {
        let mut state = CardState::default();
        state.decoys.push(DecoyButton {
            position: Position::new(20.0, 20.0),
            stack_order: 1,
        });
        assert!(state.visible_decoys().is_empty());
        state.opened = true;
        assert_eq!(state.visible_decoys().len(), 1);
        state.accepted = true;
        assert!(state.visible_decoys().is_empty());
    }

    #[test]
    fn mode_toggles_both_ways() {
        assert_eq!(EvasionMode::Spawn.toggled(), EvasionMode::Evade);
        assert_eq!(EvasionMode::Evade.toggled(), EvasionMode::Spawn);
    }

    #[test]
    fn evasive_button_serializes_with_tag() {
        let json = serde_json::to_string(&EvasiveButton::Relocated(Position::new(1.0, 2.0)))
            .unwrap();
        assert!(json.contains("\"state\":\"relocated\""), "{json}");
        let json = serde_json::to_string(&EvasiveButton::AtRest).unwrap();
        assert_eq!(json, "{\"state\":\"at_rest\"}");
    }
}
