pub mod ask_panel;
pub mod button;
pub mod celebration;
pub mod decoy_layer;
pub mod envelope;
pub mod letter;
pub mod reject_button;

pub use ask_panel::AskPanel;
pub use button::Button;
pub use celebration::Celebration;
pub use decoy_layer::DecoyLayer;
pub use envelope::Envelope;
pub use letter::Letter;
pub use reject_button::RejectButton;
