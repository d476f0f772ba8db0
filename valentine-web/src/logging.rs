//! `log` backend writing to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_console(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

/// Install the console logger.
///
/// # Errors
///
/// Returns an error if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// `[LEVEL target] message`
#[must_use]
pub fn format_record(record: &Record) -> String {
    format!(
        "[{} {}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Log level requested through `?log=<level>`, defaulting to `info`.
#[must_use]
pub fn level_from_query(search: &str) -> LevelFilter {
    crate::config::query_param(search, "log")
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_format_includes_level_and_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("decoy cap reached"))
                .level(Level::Debug)
                .target("valentine_card::decoy")
                .build(),
        );
        assert_eq!(line, "[DEBUG valentine_card::decoy] decoy cap reached");
    }

    #[test]
    fn query_selects_level() {
        assert_eq!(level_from_query("?log=trace"), LevelFilter::Trace);
        assert_eq!(level_from_query("?variant=burst&log=warn"), LevelFilter::Warn);
        assert_eq!(level_from_query("?log=loud"), LevelFilter::Info);
        assert_eq!(level_from_query(""), LevelFilter::Info);
    }
}
