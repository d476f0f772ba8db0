//! Card configuration for the browser build.
//!
//! The embedded JSON asset is the baseline; `?variant=<name>` on the page URL
//! swaps in one of the named tuning presets.
use crate::card::{CardConfig, CardVariant};

/// Value of `name` in a `?a=1&b=2` style query string.
#[must_use]
pub fn query_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Preset named by `?variant=`; unknown names are logged and ignored.
#[must_use]
pub fn variant_from_query(search: &str) -> Option<CardVariant> {
    let name = query_param(search, "variant")?;
    match name.parse::<CardVariant>() {
        Ok(variant) => Some(variant),
        Err(err) => {
            log::warn!("{err}; using the embedded card config");
            None
        }
    }
}

/// Config for a page whose query string is `search`.
#[must_use]
pub fn config_for_query(search: &str) -> CardConfig {
    let base = CardConfig::load_from_static();
    match variant_from_query(search) {
        Some(variant) => base.with_variant(variant),
        None => base,
    }
}

#[must_use]
pub fn load_card_config() -> CardConfig {
    config_for_query(&location_search())
}

/// Whether the page was opened with `?test=1`.
#[must_use]
pub fn test_mode_enabled(search: &str) -> bool {
    query_param(search, "test") == Some("1")
}

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn location_search() -> String {
    String::new()
}

/// Seed for the placement RNG, fresh for every page load.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn entropy_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now() as u64;
    random ^ now.rotate_left(32)
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn entropy_seed() -> u64 {
    0x5EED
}
