//! Declarative description of what the card shows for a given state.
//!
//! [`render`] is pure: the same state and config always produce the same
//! scene. Front ends turn the scene into markup and report input back as
//! [`crate::CardEvent`]s.
use serde::Serialize;

use crate::config::{CardConfig, CardContent};
use crate::constants::PRIMARY_ACCEPT_STACK_ORDER;
use crate::position::Position;
use crate::state::{CardState, EvasionMode};
use crate::transition::{Transition, envelope_transition, letter_transition};

pub const ENVELOPE_ARIA: &str = "Click to open envelope";
pub const ACCEPT_ARIA: &str = "Accept and say Yes";
pub const REJECT_ARIA: &str = "Reject and click No";
pub const RESTART_ARIA: &str = "Restart the experience";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardScene {
    pub envelope: EnvelopeView,
    /// Present once the envelope has been opened.
    pub letter: Option<LetterView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeView {
    pub label: String,
    pub aria_label: &'static str,
    pub stamp_url: String,
    pub stamp_alt: String,
    pub stamp_caption: String,
    /// Still reacts to activation.
    pub interactive: bool,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterView {
    pub transition: Transition,
    pub body: LetterBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LetterBody {
    Asking(AskView),
    Accepted(CelebrationView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskView {
    pub image_url: String,
    pub image_alt: String,
    pub question: String,
    pub accept: ControlView,
    pub reject: RejectView,
    pub decoys: Vec<DecoyView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub label: String,
    pub aria_label: &'static str,
    pub stack_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectView {
    pub label: String,
    pub aria_label: &'static str,
    pub stack_order: u32,
    /// Absolute placement once the control has run away.
    pub placement: Option<Position>,
    /// Hovering moves the control.
    pub evasive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoyView {
    pub index: usize,
    pub label: String,
    pub aria_label: &'static str,
    pub position: Position,
    pub stack_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CelebrationView {
    pub image_url: String,
    pub image_alt: String,
    pub message: String,
    pub restart_label: String,
    pub restart_aria_label: &'static str,
}

/// Describe the card for `state`.
#[must_use]
pub fn render(state: &CardState, config: &CardConfig) -> CardScene {
    let content = &config.content;
    let envelope = EnvelopeView {
        label: content.envelope_label.clone(),
        aria_label: ENVELOPE_ARIA,
        stamp_url: content.stamp_url.clone(),
        stamp_alt: content.stamp_alt.clone(),
        stamp_caption: content.stamp_caption.clone(),
        interactive: !state.opened,
        transition: envelope_transition(state.opened, config.transition_ms),
    };

    let letter = state.opened.then(|| LetterView {
        transition: letter_transition(config.transition_ms),
        body: if state.accepted {
            LetterBody::Accepted(celebration(content))
        } else {
            LetterBody::Asking(ask(state, config))
        },
    });

    CardScene { envelope, letter }
}

fn ask(state: &CardState, config: &CardConfig) -> AskView {
    let content = &config.content;
    let decoys = state
        .visible_decoys()
        .iter()
        .enumerate()
        .map(|(index, decoy)| DecoyView {
            index,
            label: content.accept_label.clone(),
            aria_label: ACCEPT_ARIA,
            position: decoy.position,
            stack_order: decoy.stack_order,
        })
        .collect();

    AskView {
        image_url: content.asking_image_url.clone(),
        image_alt: content.asking_image_alt.clone(),
        question: content.question.clone(),
        accept: ControlView {
            label: content.accept_label.clone(),
            aria_label: ACCEPT_ARIA,
            stack_order: PRIMARY_ACCEPT_STACK_ORDER,
        },
        reject: RejectView {
            label: content.reject_label.clone(),
            aria_label: REJECT_ARIA,
            stack_order: config.reject_stack_order,
            placement: state.evasive.position(),
            evasive: state.evasion_mode == EvasionMode::Evade,
        },
        decoys,
    }
}

fn celebration(content: &CardContent) -> CelebrationView {
    CelebrationView {
        image_url: content.accepted_image_url.clone(),
        image_alt: content.accepted_image_alt.clone(),
        message: content.celebration.clone(),
        restart_label: content.restart_label.clone(),
        restart_aria_label: RESTART_ARIA,
    }
}

impl CardScene {
    #[must_use]
    pub fn ask(&self) -> Option<&AskView> {
        match &self.letter {
            Some(LetterView {
                body: LetterBody::Asking(ask),
                ..
            }) => Some(ask),
            _ => None,
        }
    }

    #[must_use]
    pub fn celebration(&self) -> Option<&CelebrationView> {
        match &self.letter {
            Some(LetterView {
                body: LetterBody::Accepted(view),
                ..
            }) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DecoyButton, EvasiveButton};

    #[test]
    fn closed_card_shows_only_envelope() {
        let scene = render(&CardState::default(), &CardConfig::default());
        assert!(scene.letter.is_none());
        assert!(scene.envelope.interactive);
        assert!(scene.envelope.transition.is_static());
        assert_eq!(scene.envelope.label, "For Josie");
    }

    #[test]
    fn asking_scene_lists_decoys_in_order() {
        let state = CardState {
            opened: true,
            rejection_count: 1,
            decoys: vec![
                DecoyButton {
                    position: Position::new(11.0, 22.0),
                    stack_order: 1,
                },
                DecoyButton {
                    position: Position::new(33.0, 44.0),
                    stack_order: 2,
                },
            ],
            ..CardState::default()
        };
        let scene = render(&state, &CardConfig::default());
        assert!(!scene.envelope.interactive);
        let ask = scene.ask().expect("letter asks the question");
        assert_eq!(ask.decoys.len(), 2);
        assert_eq!(ask.decoys[1].index, 1);
        assert_eq!(ask.decoys[1].position, Position::new(33.0, 44.0));
        assert_eq!(ask.decoys[0].aria_label, ACCEPT_ARIA);
        assert!(ask.reject.placement.is_none());
        assert!(!ask.reject.evasive);
    }

    #[test]
    fn relocated_reject_carries_its_position() {
        let state = CardState {
            opened: true,
            evasion_mode: EvasionMode::Evade,
            evasive: EvasiveButton::Relocated(Position::new(70.0, 15.0)),
            ..CardState::default()
        };
        let scene = render(&state, &CardConfig::default());
        let reject = &scene.ask().unwrap().reject;
        assert!(reject.evasive);
        assert_eq!(reject.placement, Some(Position::new(70.0, 15.0)));
    }

    #[test]
    fn accepted_scene_hides_question_and_decoys() {
        let state = CardState {
            opened: true,
            accepted: true,
            decoys: vec![DecoyButton {
                position: Position::new(50.0, 50.0),
                stack_order: 1,
            }],
            ..CardState::default()
        };
        let scene = render(&state, &CardConfig::default());
        assert!(scene.ask().is_none());
        let view = scene.celebration().unwrap();
        assert_eq!(view.restart_label, "Start Over");
        assert_eq!(view.restart_aria_label, RESTART_ARIA);
    }
}
