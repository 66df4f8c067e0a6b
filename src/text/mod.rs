pub mod boundary;
pub mod stats;

pub use boundary::{contains_phrase, contains_word, is_word_char};
pub use stats::{count_any, letter_counts, longest_run, LetterCounts};

/// Lowercased, trimmed copy of a message used for term matching.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Normalize a configured term: lowercase, trim, and collapse inner whitespace
/// to single spaces.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
