// Keys that activate a focused role="button" element, matching native buttons.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
