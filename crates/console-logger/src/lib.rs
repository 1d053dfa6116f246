//! Console Logger
//!
//! `log` backend for the browser: each record becomes one timestamped line
//! on the console method matching its level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            self.app_name,
            &timestamp,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger { app_name, level }));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// `[12:03:44.120] Portfolio INFO  target: message`
pub fn format_line(app_name: &str, timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {} {:<5} {}: {}", timestamp, app_name, level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("Portfolio", "09:15:02.004", Level::Info, "portfolio_ui::state", "[THEME] dark");
        assert_eq!(line, "[09:15:02.004] Portfolio INFO  portfolio_ui::state: [THEME] dark");
    }

    #[test]
    fn test_format_line_pads_short_levels_only() {
        let warn = format_line("P", "t", Level::Warn, "x", "m");
        let error = format_line("P", "t", Level::Error, "x", "m");
        assert_eq!(warn, "[t] P WARN  x: m");
        assert_eq!(error, "[t] P ERROR x: m");
    }
}
