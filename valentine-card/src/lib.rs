//! Valentine Card Engine
//!
//! Platform-agnostic core of the Valentine greeting card: the card state, a
//! reducer applying input events to it, the decoy and evasion rules, and a
//! declarative scene for front ends to draw. Nothing here touches the DOM.

pub mod config;
pub mod constants;
pub mod decoy;
pub mod event;
pub mod evasion;
pub mod position;
pub mod reducer;
pub mod rng;
pub mod scene;
pub mod session;
pub mod state;
pub mod transition;

// Re-export commonly used types
pub use config::{BatchPolicy, CardConfig, CardConfigError, CardContent, CardVariant};
pub use decoy::{DecoyBatch, SpawnReport, batch_size, next_stack_order, spawn_batch, spawn_decoys};
pub use event::{AcceptSource, CardEvent, CardOutcome};
pub use evasion::relocate;
pub use position::{PercentRange, Position};
pub use reducer::{Step, reduce, step};
pub use rng::{CountingRng, derive_stream_seed, seeded_rng};
pub use scene::{
    ACCEPT_ARIA, AskView, CardScene, CelebrationView, ControlView, DecoyView, ENVELOPE_ARIA,
    EnvelopeView, LetterBody, LetterView, REJECT_ARIA, RESTART_ARIA, RejectView, render,
};
pub use session::CardSession;
pub use state::{CardState, DecoyButton, EvasionMode, EvasiveButton};
pub use transition::{Pose, Transition, envelope_transition, letter_transition};
