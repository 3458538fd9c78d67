//! Word lists for Wordle solving
//!
//! A built-in list compiled into the binary, plus loading of user lists.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN_WORDS, BUILTIN_WORDS_COUNT};
pub use loader::{builtin_words, load_from_file, words_from_lines};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN_WORDS.len(), BUILTIN_WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_words_are_unique() {
        let unique: std::collections::HashSet<_> = BUILTIN_WORDS.iter().collect();
        assert_eq!(unique.len(), BUILTIN_WORDS.len());
    }

    #[test]
    fn builtin_holds_common_openers() {
        for opener in ["crane", "slate", "raise", "house"] {
            assert!(BUILTIN_WORDS.contains(&opener), "missing {opener}");
        }
    }
}
