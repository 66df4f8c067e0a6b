pub mod context;
pub mod inspection;
pub mod verdict;

pub use context::MessageContext;
pub use inspection::Inspection;
pub use verdict::{RejectReason, RuleMatch, Verdict};

use crate::checks::Check;
use crate::config::Config;

/// Ordered set of checks built from configuration.
///
/// Immutable once built; `evaluate` and `inspect` only read it, so one
/// moderator can be shared across threads.
pub struct Moderator {
    checks: Vec<Box<dyn Check>>,
}

impl Moderator {
    /// Build the moderator from configuration.
    ///
    /// Check order is the evaluation order: blocking terms (phrases before
    /// words), warning terms (phrases before words), then the caps,
    /// punctuation, and repeated-character heuristics.
    pub fn from_config(config: &Config) -> Self {
        use crate::checks::{
            caps::CapsCheck,
            punctuation::PunctuationCheck,
            repeated::RepeatedCheck,
            terms::{Severity, TermCheck, TermKind},
        };

        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(TermCheck::from_lexicons(
                &config.lexicons,
                Severity::Block,
                TermKind::Phrase,
            )),
            Box::new(TermCheck::from_lexicons(
                &config.lexicons,
                Severity::Block,
                TermKind::Word,
            )),
            Box::new(TermCheck::from_lexicons(
                &config.lexicons,
                Severity::Warn,
                TermKind::Phrase,
            )),
            Box::new(TermCheck::from_lexicons(
                &config.lexicons,
                Severity::Warn,
                TermKind::Word,
            )),
            Box::new(CapsCheck::from_config(&config.heuristics)),
            Box::new(PunctuationCheck::from_config(&config.heuristics)),
            Box::new(RepeatedCheck::from_config(&config.heuristics)),
        ];

        Self { checks }
    }

    /// Classify a message and describe which rule decided it.
    pub fn assess(&self, message: &str) -> RuleMatch {
        let ctx = MessageContext::from_message(message);
        self.checks
            .iter()
            .find_map(|check| check.check(&ctx))
            .unwrap_or_else(|| RuleMatch {
                verdict: Verdict::Allowed,
                rule: "no rule matched".into(),
            })
    }

    /// Classify a message. Total over all strings; never fails.
    pub fn evaluate(&self, message: &str) -> Verdict {
        self.assess(message).verdict
    }

    /// Run every check without short-circuiting.
    pub fn inspect(&self, message: &str) -> Inspection {
        let ctx = MessageContext::from_message(message);
        let mut inspection = Inspection::default();
        for check in &self.checks {
            if check.check(&ctx).is_some() {
                inspection.record(check.signal());
            }
        }
        inspection
    }
}
