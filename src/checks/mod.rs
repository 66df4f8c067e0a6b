//! Moderation checks: lexicon terms and statistical heuristics.
//!
//! Each check inspects a prepared [`MessageContext`] and either stays silent
//! or returns the `RuleMatch` it would decide. The [`Moderator`](crate::Moderator)
//! owns them in evaluation order.

/// Uppercase-ratio heuristic ("shouting").
pub mod caps;
/// Exclamation/question-mark ratio heuristic.
pub mod punctuation;
/// Identical-consecutive-character heuristic.
pub mod repeated;
/// Blocking and warning terms, tagged word or phrase.
pub mod terms;

use crate::eval::{MessageContext, RuleMatch};

/// Which inspection flag a check feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Blocking,
    Warning,
    AllCaps,
    ExcessivePunctuation,
    RepeatedChars,
}

/// A single moderation check.
///
/// Implementations are read-only after construction and must be shareable
/// across threads.
pub trait Check: Send + Sync {
    /// The inspection flag this check sets when it fires.
    fn signal(&self) -> Signal;

    /// Return the match this check would decide, or `None` to pass.
    fn check(&self, ctx: &MessageContext) -> Option<RuleMatch>;
}
