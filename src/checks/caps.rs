use crate::checks::{Check, Signal};
use crate::config::Heuristics;
use crate::eval::{MessageContext, RejectReason, RuleMatch, Verdict};

/// Rejects messages that are mostly uppercase letters.
///
/// Only letters count toward the ratio; digits, punctuation, and whitespace
/// are ignored. Short messages (not more than `min_letters` letters) pass.
pub struct CapsCheck {
    ratio: f64,
    min_letters: usize,
}

impl CapsCheck {
    pub fn from_config(config: &Heuristics) -> Self {
        Self {
            ratio: config.caps_ratio,
            min_letters: config.caps_min_letters,
        }
    }
}

impl Check for CapsCheck {
    fn signal(&self) -> Signal {
        Signal::AllCaps
    }

    fn check(&self, ctx: &MessageContext) -> Option<RuleMatch> {
        let counts = crate::text::letter_counts(ctx.raw);
        if counts.letters <= self.min_letters {
            return None;
        }
        let ratio = counts.uppercase_ratio();
        if ratio <= self.ratio {
            return None;
        }
        Some(RuleMatch {
            verdict: Verdict::Rejected(RejectReason::ExcessiveCaps),
            rule: format!(
                "caps ratio {ratio:.2} over {} ({} of {} letters)",
                self.ratio, counts.uppercase, counts.letters
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires(message: &str) -> bool {
        CapsCheck::from_config(&Heuristics::default())
            .check(&MessageContext::from_message(message))
            .is_some()
    }

    #[test]
    fn eleven_letters_eight_upper() {
        // 8 / 11 ≈ 0.727
        assert!(fires("GREAT JOBabc"));
    }

    #[test]
    fn nine_letters_all_upper_below_activation() {
        assert!(!fires("HAPPY DAYS"));
    }

    #[test]
    fn ten_letters_all_upper_below_activation() {
        assert!(!fires("HELLO WORLD"));
    }

    #[test]
    fn ratio_at_threshold_passes() {
        // 14 / 20 = 0.7 exactly.
        assert!(!fires("ABCDEFGHIJKLMNopqrst"));
    }

    #[test]
    fn digits_and_punctuation_not_in_denominator() {
        assert!(fires("HELLO THERE FRIEND 123 ..."));
    }

    #[test]
    fn mixed_case_passes() {
        assert!(!fires("Happy Valentine's Day to Everyone"));
    }
}
