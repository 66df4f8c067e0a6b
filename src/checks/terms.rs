use crate::checks::{Check, Signal};
use crate::config::Lexicon;
use crate::eval::{MessageContext, RejectReason, RuleMatch, Verdict};

/// How a term is matched against a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// Single word: whole-word match.
    Word,
    /// Contains whitespace: contiguous substring match.
    Phrase,
}

impl TermKind {
    /// Tag a normalized term. Anything with inner whitespace is a phrase.
    pub fn of(term: &str) -> Self {
        if term.contains(char::is_whitespace) {
            TermKind::Phrase
        } else {
            TermKind::Word
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TermKind::Word => "word",
            TermKind::Phrase => "phrase",
        }
    }
}

/// Which lexicon list a term came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Block,
    Warn,
}

impl Severity {
    fn as_str(self) -> &'static str {
        match self {
            Severity::Block => "blocking",
            Severity::Warn => "warning",
        }
    }

    fn verdict(self) -> Verdict {
        match self {
            Severity::Block => Verdict::Rejected(RejectReason::InappropriateContent),
            Severity::Warn => Verdict::AllowedWithWarning,
        }
    }
}

/// A normalized lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub kind: TermKind,
    pub locale: String,
}

impl Term {
    /// Normalize a configured term. Blank terms yield `None`: an empty
    /// pattern would match every message.
    pub fn new(raw: &str, locale: &str) -> Option<Self> {
        let text = crate::text::normalize_term(raw);
        if text.is_empty() {
            log::warn!("ignoring blank term in lexicon {locale:?}");
            return None;
        }
        Some(Self {
            kind: TermKind::of(&text),
            text,
            locale: locale.to_string(),
        })
    }

    pub fn matches(&self, ctx: &MessageContext) -> bool {
        match self.kind {
            TermKind::Word => ctx.has_word(&self.text),
            TermKind::Phrase => ctx.has_phrase(&self.text),
        }
    }
}

/// All terms of one severity and one kind, in lexicon order.
pub struct TermCheck {
    severity: Severity,
    kind: TermKind,
    terms: Vec<Term>,
}

impl TermCheck {
    /// Collect the `severity` terms of `kind` from every lexicon.
    /// Lexicons keep their configured order; duplicates are dropped.
    pub fn from_lexicons(lexicons: &[Lexicon], severity: Severity, kind: TermKind) -> Self {
        let mut terms: Vec<Term> = Vec::new();
        for lexicon in lexicons {
            let source = match severity {
                Severity::Block => &lexicon.block,
                Severity::Warn => &lexicon.warn,
            };
            for raw in source {
                let Some(term) = Term::new(raw, &lexicon.locale) else {
                    continue;
                };
                if term.kind == kind && !terms.iter().any(|t| t.text == term.text) {
                    terms.push(term);
                }
            }
        }
        Self {
            severity,
            kind,
            terms,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Check for TermCheck {
    fn signal(&self) -> Signal {
        match self.severity {
            Severity::Block => Signal::Blocking,
            Severity::Warn => Signal::Warning,
        }
    }

    fn check(&self, ctx: &MessageContext) -> Option<RuleMatch> {
        let term = self.terms.iter().find(|t| t.matches(ctx))?;
        Some(RuleMatch {
            verdict: self.severity.verdict(),
            rule: format!(
                "{} {} \"{}\" ({})",
                self.severity.as_str(),
                self.kind.as_str(),
                term.text,
                term.locale
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn lexicon(locale: &str, block: &[&str], warn: &[&str]) -> Lexicon {
        Lexicon {
            locale: locale.into(),
            block: block.iter().map(|s| s.to_string()).collect(),
            warn: warn.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run(check: &TermCheck, message: &str) -> Option<RuleMatch> {
        check.check(&MessageContext::from_message(message))
    }

    #[test]
    fn tags_terms_by_whitespace() {
        assert_eq!(TermKind::of("kys"), TermKind::Word);
        assert_eq!(TermKind::of("kill yourself"), TermKind::Phrase);
    }

    #[test]
    fn blank_terms_are_dropped() {
        assert!(Term::new("   ", "en").is_none());
        let term = Term::new(" Kill  Yourself ", "en").unwrap();
        assert_eq!(term.text, "kill yourself");
        assert_eq!(term.kind, TermKind::Phrase);
    }

    #[test]
    fn word_check_ignores_phrases() {
        let lex = [lexicon("en", &["fat", "you suck"], &[])];
        let check = TermCheck::from_lexicons(&lex, Severity::Block, TermKind::Word);
        assert_eq!(check.terms().len(), 1);
        assert_eq!(check.terms()[0].text, "fat");
    }

    #[test]
    fn word_check_respects_boundaries() {
        let lex = [lexicon("en", &["fat"], &[])];
        let check = TermCheck::from_lexicons(&lex, Severity::Block, TermKind::Word);
        assert!(run(&check, "my father").is_none());
        let hit = run(&check, "You are FAT").unwrap();
        assert_eq!(
            hit.verdict,
            Verdict::Rejected(RejectReason::InappropriateContent)
        );
        assert_eq!(hit.rule, "blocking word \"fat\" (en)");
    }

    #[test]
    fn phrase_check_is_substring() {
        let lex = [lexicon("en", &["kill yourself"], &[])];
        let check = TermCheck::from_lexicons(&lex, Severity::Block, TermKind::Phrase);
        assert!(run(&check, "please KILL YOURSELF now").is_some());
        assert!(run(&check, "kill the lights yourself").is_none());
    }

    #[test]
    fn warn_severity_yields_warning() {
        let lex = [lexicon("en", &[], &["lame"])];
        let check = TermCheck::from_lexicons(&lex, Severity::Warn, TermKind::Word);
        assert_eq!(check.signal(), Signal::Warning);
        assert_eq!(
            run(&check, "that's so lame").unwrap().verdict,
            Verdict::AllowedWithWarning
        );
    }

    #[test]
    fn lexicons_flattened_in_order_without_duplicates() {
        let lex = [
            lexicon("en", &["loser", "hate"], &[]),
            lexicon("ceb", &["yawa", "hate"], &[]),
        ];
        let check = TermCheck::from_lexicons(&lex, Severity::Block, TermKind::Word);
        let texts: Vec<&str> = check.terms().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["loser", "hate", "yawa"]);
        assert_eq!(check.terms()[2].locale, "ceb");
    }

    #[test]
    fn default_cebuano_terms_loaded() {
        let config = Config::default_config();
        let check = TermCheck::from_lexicons(&config.lexicons, Severity::Block, TermKind::Phrase);
        assert!(check.terms().iter().any(|t| t.text == "yawa ka" && t.locale == "ceb"));
    }
}
