use serde::Serialize;

use crate::checks::Signal;

/// Result of running every check independently.
///
/// Unlike a verdict, nothing short-circuits: each flag reports whether its
/// check would fire on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Inspection {
    pub has_blocking_match: bool,
    pub has_warning_match: bool,
    pub all_caps: bool,
    pub excessive_punctuation: bool,
    pub repeated_chars: bool,
}

impl Inspection {
    pub fn record(&mut self, signal: Signal) {
        match signal {
            Signal::Blocking => self.has_blocking_match = true,
            Signal::Warning => self.has_warning_match = true,
            Signal::AllCaps => self.all_caps = true,
            Signal::ExcessivePunctuation => self.excessive_punctuation = true,
            Signal::RepeatedChars => self.repeated_chars = true,
        }
    }

    /// True when no check fired.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}
