/// Letter tallies for the caps check. Digits, punctuation, and whitespace are
/// not letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    pub letters: usize,
    pub uppercase: usize,
}

impl LetterCounts {
    /// Share of letters that are uppercase; `0.0` when there are none.
    pub fn uppercase_ratio(&self) -> f64 {
        if self.letters == 0 {
            return 0.0;
        }
        self.uppercase as f64 / self.letters as f64
    }
}

pub fn letter_counts(text: &str) -> LetterCounts {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .fold(LetterCounts::default(), |mut acc, c| {
            acc.letters += 1;
            if c.is_uppercase() {
                acc.uppercase += 1;
            }
            acc
        })
}

/// Number of characters in `text` that appear in `set`.
pub fn count_any(text: &str, set: &[char]) -> usize {
    text.chars().filter(|c| set.contains(c)).count()
}

/// Length of the longest run of identical consecutive characters.
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev = None;
    for c in text.chars() {
        if prev == Some(c) {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_exclude_digits_and_punctuation() {
        let counts = letter_counts("ABC def 123 !!");
        assert_eq!(counts.letters, 6);
        assert_eq!(counts.uppercase, 3);
        assert!((counts.uppercase_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_without_letters_is_zero() {
        assert_eq!(letter_counts("1234 !?").uppercase_ratio(), 0.0);
    }

    #[test]
    fn counts_non_ascii_letters() {
        let counts = letter_counts("ÉCOLE");
        assert_eq!(counts.letters, 5);
        assert_eq!(counts.uppercase, 5);
    }

    #[test]
    fn count_any_counts_each_occurrence() {
        assert_eq!(count_any("what?!?! ok!", &['!', '?']), 5);
        assert_eq!(count_any("", &['!']), 0);
    }

    #[test]
    fn longest_run_basic() {
        assert_eq!(longest_run("noooooo"), 6);
        assert_eq!(longest_run("nooo"), 3);
        assert_eq!(longest_run("abc"), 1);
        assert_eq!(longest_run(""), 0);
    }

    #[test]
    fn longest_run_picks_the_longest() {
        assert_eq!(longest_run("aaabbbbbcc"), 5);
    }
}
