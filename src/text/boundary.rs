//! Word-boundary matching shared by every single-word lexicon check.

/// Characters that form words: alphanumerics and `_`, like regex `\w`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `word` occurs in `haystack` as a whole word, ignoring case.
///
/// `word` must already be lowercased; `haystack` is the message as written.
/// Case is folded one character at a time and the boundary characters are
/// read from `haystack` itself, so a fold that expands (`İ` becomes `i` plus
/// a combining dot) can neither create nor hide a boundary. `fat` is found
/// in `"You are FAT"` but not in `"father"` or `"İfat"`.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    // Every start offset is tried; a rejected match must not hide an
    // overlapping one that sits on a boundary.
    let mut before: Option<char> = None;
    for (start, c) in haystack.char_indices() {
        if !before.is_some_and(is_word_char)
            && let Some(len) = folded_prefix_len(&haystack[start..], word)
        {
            let after = haystack[start + len..].chars().next();
            if !after.is_some_and(is_word_char) {
                return true;
            }
        }
        before = Some(c);
    }
    false
}

/// Byte length of the prefix of `text` whose lowercase form is exactly
/// `word`. A prefix that ends partway through one character's fold does not
/// count.
fn folded_prefix_len(text: &str, word: &str) -> Option<usize> {
    let mut rest = word;
    for (offset, c) in text.char_indices() {
        if rest.is_empty() {
            return Some(offset);
        }
        for lower in c.to_lowercase() {
            rest = rest.strip_prefix(lower)?;
        }
    }
    rest.is_empty().then_some(text.len())
}

/// Whether `phrase` occurs in `haystack` as a contiguous substring.
///
/// Phrases are unambiguous as a unit, so no boundary test is applied.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    !phrase.is_empty() && haystack.contains(phrase)
}
