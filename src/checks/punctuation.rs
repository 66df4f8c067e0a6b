use crate::checks::{Check, Signal};
use crate::config::Heuristics;
use crate::eval::{MessageContext, RejectReason, RuleMatch, Verdict};

const MARKS: [char; 2] = ['!', '?'];

/// Rejects messages where `!` and `?` make up too much of the text.
///
/// The denominator is the whole message length in characters. Messages of
/// at most `min_length` characters pass.
pub struct PunctuationCheck {
    ratio: f64,
    min_length: usize,
}

impl PunctuationCheck {
    pub fn from_config(config: &Heuristics) -> Self {
        Self {
            ratio: config.punctuation_ratio,
            min_length: config.punctuation_min_length,
        }
    }
}

impl Check for PunctuationCheck {
    fn signal(&self) -> Signal {
        Signal::ExcessivePunctuation
    }

    fn check(&self, ctx: &MessageContext) -> Option<RuleMatch> {
        if ctx.char_len <= self.min_length {
            return None;
        }
        let marks = crate::text::count_any(ctx.raw, &MARKS);
        let ratio = marks as f64 / ctx.char_len as f64;
        if ratio <= self.ratio {
            return None;
        }
        Some(RuleMatch {
            verdict: Verdict::Rejected(RejectReason::ExcessivePunctuation),
            rule: format!(
                "punctuation ratio {ratio:.2} over {} ({marks} of {} chars)",
                self.ratio, ctx.char_len
            ),
        })
    }
}
