use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::eval::RuleMatch;

/// Environment variable that overrides `settings.log_level`.
pub const LOG_LEVEL_ENV: &str = "SHOUTOUT_GUARD_LOG";

const LOG_DIR: &str = "~/.local/share/shoutout-guard";

/// Longest message excerpt written to the log, in characters.
const MAX_LOGGED_CHARS: usize = 200;

/// Install the process logger: warnings and errors to stderr, everything to
/// ~/.local/share/shoutout-guard/verdicts.log.
///
/// Best-effort: if the log file cannot be opened only stderr is used, and a
/// logger that is already installed is left alone. Logging must never block
/// a verdict.
pub fn init() {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )];
    if let Some(file) = open_log_file() {
        loggers.push(WriteLogger::new(LevelFilter::Trace, config, file));
    }
    let _ = CombinedLogger::init(loggers);
}

/// Apply the configured level, letting the environment override it.
/// Unparseable values fall back to `info`.
pub fn set_level(configured: &str) {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .or_else(|| parse_level(configured))
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

fn log_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(LOG_DIR).into_owned()).join("verdicts.log")
}

fn open_log_file() -> Option<std::fs::File> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

/// Record one verdict as a single tab-separated line.
pub fn log_verdict(message: &str, result: &RuleMatch) {
    log::info!("{}", verdict_line(message, result));
}

fn verdict_line(message: &str, result: &RuleMatch) -> String {
    let excerpt: String = message.chars().take(MAX_LOGGED_CHARS).collect();
    // Keep one record per line
    let excerpt = excerpt.replace(['\r', '\n'], "; ");
    format!(
        "{verdict}\t{excerpt}\t{rule}",
        verdict = result.verdict.as_str(),
        rule = result.rule,
    )
}
