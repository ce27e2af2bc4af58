//! Logging setup
//!
//! Colorized console output: magenta timestamp, yellow `[target]` tag naming the
//! emitting module, colored level, then the message.

use std::io::Write;
use std::str::FromStr;

use env_logger::fmt::Color;
use log::LevelFilter;

use crate::core::config::LoggingConfig;

/// Initialize the logging system from configuration.
///
/// `RUST_LOG`, when set, takes precedence over the configured level. Returns an
/// error if a global logger was already installed.
pub fn init(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let level = parse_level(&config.level);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_env("RUST_LOG");
    builder.format(|buf, record| {
        let mut time_style = buf.style();
        time_style.set_color(Color::Magenta);
        let mut target_style = buf.style();
        target_style.set_color(Color::Yellow);

        writeln!(
            buf,
            "{} {} {} {}",
            time_style.value(buf.timestamp()),
            target_style.value(format!("[{}]", short_target(record.target()))),
            buf.default_styled_level(record.level()),
            record.args()
        )
    });
    builder.try_init()
}

/// Parse a level name, falling back to `info` for anything unrecognized
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

/// Last path segment of a module target (`gl_engine::ui::renderer` -> `renderer`)
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}
