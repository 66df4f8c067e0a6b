/// A message prepared once for all checks.
#[derive(Debug)]
pub struct MessageContext<'a> {
    /// The message exactly as submitted. Ratio checks read casing and
    /// punctuation from here, and word boundaries are judged against it.
    pub raw: &'a str,
    /// Lowercased, trimmed copy used for phrase matching.
    pub lowered: String,
    /// Length of `raw` in characters.
    pub char_len: usize,
}

impl<'a> MessageContext<'a> {
    pub fn from_message(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: crate::text::normalize(raw),
            char_len: raw.chars().count(),
        }
    }

    /// Case-insensitive whole-word match against the raw message.
    pub fn has_word(&self, word: &str) -> bool {
        crate::text::contains_word(self.raw, word)
    }

    /// Substring match against the lowered message.
    pub fn has_phrase(&self, phrase: &str) -> bool {
        crate::text::contains_phrase(&self.lowered, phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_raw_and_lowers_copy() {
        let ctx = MessageContext::from_message("  You ARE Great  ");
        assert_eq!(ctx.raw, "  You ARE Great  ");
        assert_eq!(ctx.lowered, "you are great");
        assert_eq!(ctx.char_len, 17);
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let ctx = MessageContext::from_message("día 💕");
        assert_eq!(ctx.char_len, 5);
    }

    #[test]
    fn word_and_phrase_helpers() {
        let ctx = MessageContext::from_message("Please Kill Yourself");
        assert!(ctx.has_phrase("kill yourself"));
        assert!(ctx.has_word("kill"));
        assert!(!ctx.has_word("kil"));
    }

    #[test]
    fn word_boundaries_read_from_raw_message() {
        let ctx = MessageContext::from_message("İfat");
        assert_eq!(ctx.lowered, "i\u{307}fat");
        assert!(!ctx.has_word("fat"));
    }
}
