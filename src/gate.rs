//! Submission and AI-rewrite acceptance.
//!
//! The booth form validates a whole shoutout before it reaches the feed and
//! re-checks any AI-stylized rewrite before it may replace the sender's text.
//! Both paths end in the same [`Moderator`]; a rejected verdict always blocks.

use serde::{Deserialize, Serialize};

use crate::config::{Config, SubmissionConfig};
use crate::eval::{Moderator, RejectReason, Verdict};

/// A shoutout as entered in the booth form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Submission {
    /// Falls back to the configured default sender when absent.
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub message: String,
    /// Falls back to the first configured frame when absent.
    #[serde(default)]
    pub frame: Option<String>,
}

/// A submission that passed validation and moderation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accepted {
    pub sender: String,
    pub recipient: String,
    pub message: String,
    pub frame: String,
    /// The message matched a warning term; show a non-blocking notice.
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("sender name is required")]
    MissingSender,
    #[error("recipient name is required")]
    MissingRecipient,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message must be {max} characters or less")]
    MessageTooLong { max: usize },
    #[error("unknown frame: {0}")]
    UnknownFrame(String),
    #[error("message rejected: {0}")]
    Rejected(RejectReason),
}

/// An AI rewrite that may replace the sender's message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rewrite {
    pub message: String,
    /// The rewrite exceeded the length limit and was cut to fit.
    pub truncated: bool,
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("rewrite returned no message")]
    Empty,
    #[error("rewrite rejected: {0}")]
    Rejected(RejectReason),
}

/// Submission limits plus the moderator that decides message content.
pub struct SubmissionGate {
    moderator: Moderator,
    limits: SubmissionConfig,
}

impl SubmissionGate {
    pub fn from_config(config: &Config) -> Self {
        Self {
            moderator: Moderator::from_config(config),
            limits: config.submission.clone(),
        }
    }

    pub fn moderator(&self) -> &Moderator {
        &self.moderator
    }

    /// Validate a submission, then moderate its message.
    ///
    /// Field checks run in form order (sender, recipient, message, frame) and
    /// the first failure is returned. Moderation runs last and always, so a
    /// message that passed an earlier interactive check is judged again here.
    pub fn check(&self, submission: &Submission) -> Result<Accepted, SubmissionError> {
        let sender = submission
            .sender
            .clone()
            .unwrap_or_else(|| self.limits.default_sender.clone());
        if sender.trim().is_empty() {
            return Err(SubmissionError::MissingSender);
        }
        if submission.recipient.trim().is_empty() {
            return Err(SubmissionError::MissingRecipient);
        }
        if submission.message.trim().is_empty() {
            return Err(SubmissionError::EmptyMessage);
        }
        if submission.message.chars().count() > self.limits.max_message_chars {
            return Err(SubmissionError::MessageTooLong {
                max: self.limits.max_message_chars,
            });
        }
        let frame = match &submission.frame {
            Some(frame) => frame.clone(),
            None => self.limits.frames.first().cloned().unwrap_or_default(),
        };
        if !self.limits.frames.contains(&frame) {
            return Err(SubmissionError::UnknownFrame(frame));
        }

        let result = self.moderator.assess(&submission.message);
        crate::logging::log_verdict(&submission.message, &result);
        match result.verdict {
            Verdict::Rejected(reason) => Err(SubmissionError::Rejected(reason)),
            verdict => Ok(Accepted {
                sender,
                recipient: submission.recipient.clone(),
                message: submission.message.clone(),
                frame,
                warning: verdict.is_warning(),
            }),
        }
    }

    /// Accept or refuse an AI-stylized rewrite.
    ///
    /// Over-long output is cut to the message limit first, and the text that
    /// would actually be used is what gets moderated.
    pub fn accept_rewrite(&self, text: &str) -> Result<Rewrite, RewriteError> {
        if text.trim().is_empty() {
            return Err(RewriteError::Empty);
        }
        let max = self.limits.max_message_chars;
        let truncated = text.chars().count() > max;
        let message: String = if truncated {
            text.chars().take(max).collect()
        } else {
            text.to_string()
        };

        let result = self.moderator.assess(&message);
        crate::logging::log_verdict(&message, &result);
        match result.verdict {
            Verdict::Rejected(reason) => Err(RewriteError::Rejected(reason)),
            verdict => Ok(Rewrite {
                message,
                truncated,
                warning: verdict.is_warning(),
            }),
        }
    }
}
