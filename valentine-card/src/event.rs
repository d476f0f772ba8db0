use serde::{Deserialize, Serialize};

use crate::decoy::SpawnReport;
use crate::position::Position;
use crate::state::EvasionMode;

/// Which accept control the viewer activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum AcceptSource {
    Primary,
    /// Index into `CardState::decoys`.
    Decoy(usize),
}

/// Discrete input reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CardEvent {
    /// Click or activation key on the envelope.
    OpenEnvelope,
    Accept { source: AcceptSource },
    /// Click or activation of the rejection control.
    Reject,
    /// Pointer entered the rejection control's hit area.
    PointerEnterReject,
    Restart,
}

impl CardEvent {
    pub const ACCEPT_PRIMARY: Self = Self::Accept {
        source: AcceptSource::Primary,
    };

    #[must_use]
    pub const fn accept_decoy(index: usize) -> Self {
        Self::Accept {
            source: AcceptSource::Decoy(index),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OpenEnvelope => "open",
            Self::Accept {
                source: AcceptSource::Primary,
            } => "accept",
            Self::Accept {
                source: AcceptSource::Decoy(_),
            } => "accept-decoy",
            Self::Reject => "reject",
            Self::PointerEnterReject => "hover-reject",
            Self::Restart => "restart",
        }
    }
}

/// Observable effect of one event, for logging and announcements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CardOutcome {
    Opened,
    Accepted,
    DecoysSpawned { report: SpawnReport },
    Relocated { position: Position },
    Restarted { mode: EvasionMode },
    /// The event had no effect in the current state.
    Ignored,
}

impl CardOutcome {
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
