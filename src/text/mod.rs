//! Text normalization for question matching
//!
//! Turns free text into a bag of meaningful words: tokenized, lowercased,
//! alphabetic-only, with stopwords removed.

pub mod stopwords;
pub mod tokenizer;

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

pub use stopwords::is_stopword;
pub use tokenizer::word_tokenize;

/// A set of normalized tokens
pub type TokenSet = HashSet<String>;

/// Normalize text into its set of meaningful tokens
///
/// Never fails; empty input yields an empty set.
pub fn normalize(text: &str) -> TokenSet {
    word_tokenize(text)
        .into_iter()
        .map(|token| token.to_lowercase())
        .filter(|token| is_meaningful(token))
        .collect()
}

/// Letters only (Unicode categories L*); combining marks and digits fail
fn is_letters(token: &str) -> bool {
    static LETTERS: OnceLock<Option<Regex>> = OnceLock::new();
    LETTERS
        .get_or_init(|| Regex::new(r"^\p{L}+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(token))
}

fn is_meaningful(token: &str) -> bool {
    is_letters(token) && !is_stopword(token)
}
