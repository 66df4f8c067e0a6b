use std::fmt;

use serde::Serialize;

/// Why a message was rejected. The label is shown to the sender; it never
/// contains the offending text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RejectReason {
    #[serde(rename = "inappropriate content")]
    InappropriateContent,
    #[serde(rename = "excessive capital letters")]
    ExcessiveCaps,
    #[serde(rename = "excessive punctuation")]
    ExcessivePunctuation,
    #[serde(rename = "repeated characters")]
    RepeatedCharacters,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::InappropriateContent => "inappropriate content",
            RejectReason::ExcessiveCaps => "excessive capital letters",
            RejectReason::ExcessivePunctuation => "excessive punctuation",
            RejectReason::RepeatedCharacters => "repeated characters",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of moderating one message.
///
/// Serializes as `{"verdict": "allowed"}`, `{"verdict": "allowed_with_warning"}`,
/// or `{"verdict": "rejected", "reason": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Allowed,
    AllowedWithWarning,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allowed => "allowed",
            Verdict::AllowedWithWarning => "allowed_with_warning",
            Verdict::Rejected(_) => "rejected",
        }
    }

    /// True for both allowed variants.
    pub fn is_allowed(self) -> bool {
        !matches!(self, Verdict::Rejected(_))
    }

    pub fn is_warning(self) -> bool {
        matches!(self, Verdict::AllowedWithWarning)
    }

    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Verdict::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A verdict together with a description of the rule that produced it.
///
/// `rule` is for logs and diagnostics (it may quote the matched term) and is
/// not meant for the sender.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub verdict: Verdict,
    pub rule: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reason_labels() {
        assert_eq!(
            RejectReason::InappropriateContent.to_string(),
            "inappropriate content"
        );
        assert_eq!(
            RejectReason::ExcessiveCaps.as_str(),
            "excessive capital letters"
        );
    }

    #[test]
    fn allowed_variants_are_allowed() {
        assert!(Verdict::Allowed.is_allowed());
        assert!(Verdict::AllowedWithWarning.is_allowed());
        assert!(!Verdict::Rejected(RejectReason::RepeatedCharacters).is_allowed());
    }

    #[test]
    fn only_rejected_has_reason() {
        assert_eq!(Verdict::Allowed.reason(), None);
        assert_eq!(Verdict::AllowedWithWarning.reason(), None);
        assert_eq!(
            Verdict::Rejected(RejectReason::ExcessivePunctuation).reason(),
            Some(RejectReason::ExcessivePunctuation)
        );
    }

    #[test]
    fn serializes_as_tagged_object() {
        assert_eq!(
            serde_json::to_value(Verdict::Allowed).unwrap(),
            json!({"verdict": "allowed"})
        );
        assert_eq!(
            serde_json::to_value(Verdict::AllowedWithWarning).unwrap(),
            json!({"verdict": "allowed_with_warning"})
        );
        assert_eq!(
            serde_json::to_value(Verdict::Rejected(RejectReason::ExcessivePunctuation)).unwrap(),
            json!({"verdict": "rejected", "reason": "excessive punctuation"})
        );
    }
}
