//! shoutout-guard: message moderation for the Valentine Shoutout Booth feed.
//!
//! Every shoutout is classified before it reaches the public feed. The engine
//! returns one of three verdicts: [`Verdict::Allowed`],
//! [`Verdict::AllowedWithWarning`], or [`Verdict::Rejected`] with a fixed
//! [`RejectReason`]. Lexicon terms and heuristic thresholds come from
//! configuration; evaluation itself is a pure function of the message.
//!
//! # Architecture
//!
//! - **[`text`]** — Normalization, word-boundary matching, character statistics.
//! - **[`checks`]** — Individual checks: lexicon terms, caps, punctuation, repeated characters.
//! - **[`eval`]** — The [`Moderator`]: ordered checks, verdict types, inspection.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`gate`]** — Submission and AI-rewrite acceptance built on the moderator.
//! - **[`logging`]** — Verdict logging to `~/.local/share/shoutout-guard/verdicts.log`.

/// Check trait and the lexicon and heuristic implementations.
pub mod checks;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: moderator, verdict types, inspection.
pub mod eval;
/// Submission validation and AI rewrite acceptance.
pub mod gate;
/// File-based verdict logging.
pub mod logging;
/// Text normalization and matching primitives.
pub mod text;

use std::sync::LazyLock;

pub use eval::{Inspection, Moderator, RejectReason, RuleMatch, Verdict};

/// Moderator built once from the embedded default configuration.
static DEFAULT_MODERATOR: LazyLock<Moderator> =
    LazyLock::new(|| Moderator::from_config(&config::Config::default_config()));

/// The process-wide moderator backed by the embedded defaults.
pub fn default_moderator() -> &'static Moderator {
    &DEFAULT_MODERATOR
}

/// Classify a message with the default rules.
///
/// This is the main entry point for tests and simple usage.
/// For user configuration, build a [`Moderator`] from a loaded [`config::Config`].
pub fn evaluate(message: &str) -> Verdict {
    DEFAULT_MODERATOR.evaluate(message)
}

/// Run every check with the default rules and report each result.
pub fn inspect(message: &str) -> Inspection {
    DEFAULT_MODERATOR.inspect(message)
}
