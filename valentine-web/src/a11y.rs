// Accessibility helpers
use crate::card::CardOutcome;

/// Element id of the polite live region announcing card changes.
pub const STATUS_REGION_ID: &str = "card-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected with the card.
/// Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:4px solid #ffffff;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Text announced to assistive technology for an outcome, if any.
#[must_use]
pub fn announcement(outcome: &CardOutcome, recipient: &str) -> Option<String> {
    match outcome {
        CardOutcome::Opened => Some(format!("Envelope opened. A letter for {recipient}.")),
        CardOutcome::Accepted => Some("Accepted. Happy Valentine's Day!".to_string()),
        CardOutcome::DecoysSpawned { report } if report.added > 0 => Some(format!(
            "{} more Yes button{} appeared.",
            report.added,
            if report.added == 1 { "" } else { "s" }
        )),
        CardOutcome::Restarted { .. } => Some("Card closed. Open the envelope to start again.".to_string()),
        CardOutcome::DecoysSpawned { .. } | CardOutcome::Relocated { .. } | CardOutcome::Ignored => {
            None
        }
    }
}

/// Update the live region status for screen readers
///
/// Updates the text content of the status element if present.
#[cfg(target_arch = "wasm32")]
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_status(msg: &str) {
    let _ = msg;
}
