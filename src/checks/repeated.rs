use crate::checks::{Check, Signal};
use crate::config::Heuristics;
use crate::eval::{MessageContext, RejectReason, RuleMatch, Verdict};

/// Rejects messages containing a long run of one character (`noooooo`).
pub struct RepeatedCheck {
    run: usize,
    min_length: usize,
}

impl RepeatedCheck {
    pub fn from_config(config: &Heuristics) -> Self {
        Self {
            run: config.repeat_run,
            min_length: config.repeat_min_length,
        }
    }
}

impl Check for RepeatedCheck {
    fn signal(&self) -> Signal {
        Signal::RepeatedChars
    }

    fn check(&self, ctx: &MessageContext) -> Option<RuleMatch> {
        if ctx.char_len <= self.min_length {
            return None;
        }
        let longest = crate::text::longest_run(ctx.raw);
        if longest < self.run {
            return None;
        }
        Some(RuleMatch {
            verdict: Verdict::Rejected(RejectReason::RepeatedCharacters),
            rule: format!("run of {longest} identical characters (limit {})", self.run),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires(message: &str) -> bool {
        RepeatedCheck::from_config(&Heuristics::default())
            .check(&MessageContext::from_message(message))
            .is_some()
    }

    #[test]
    fn long_run_fires() {
        assert!(fires("noooooo"));
    }

    #[test]
    fn short_run_passes() {
        assert!(!fires("nooo"));
        assert!(!fires("nooo way"));
    }

    #[test]
    fn run_of_exactly_five() {
        assert!(fires("aaaaab"));
    }

    #[test]
    fn five_char_message_below_activation() {
        assert!(!fires("aaaaa"));
    }

    #[test]
    fn runs_of_punctuation_count() {
        assert!(fires("yay!!!!!"));
    }
}
