//! English word tokenizer
//!
//! Treebank-style: whitespace separates chunks, and only sentence punctuation,
//! brackets, quotes and a handful of symbols are split off. Everything else
//! (`/`, `+`, `_`, `-`, inner `.` and `'`) stays attached to its word, so
//! `hi/hello` and `o'clock` remain single tokens. Contractions are separated
//! (`don't` → `do` `n't`, `what's` → `what` `'s`, `cannot` → `can` `not`).

/// Contraction suffixes split off the end of a word, longest first
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d", "'"];

/// Whole words split into two tokens at the given char offset
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

/// Split text into word-level tokens, preserving case
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        tokenize_chunk(chunk, &mut tokens);
    }
    tokens
}

/// Characters that always stand alone
fn is_split_char(c: char) -> bool {
    matches!(
        c,
        ';' | '@'
            | '#'
            | '$'
            | '%'
            | '&'
            | '?'
            | '!'
            | '*'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '"'
            | '«'
            | '»'
            | '“'
            | '”'
            | '„'
            | '‘'
            | '’'
    )
}

/// Length of the punctuation token starting at `i`, or 0 if `chars[i]` belongs to a word
fn split_len(chars: &[char], i: usize) -> usize {
    let c = chars[i];
    let next = chars.get(i + 1).copied();

    if is_split_char(c) {
        return 1;
    }
    // "1,000" and "10:30" keep their separators
    if matches!(c, ',' | ':') && !next.is_some_and(char::is_numeric) {
        return 1;
    }
    // "--" and ellipses
    if matches!(c, '-' | '.') && next == Some(c) {
        return chars[i..].iter().take_while(|&&x| x == c).count();
    }
    0
}

fn tokenize_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut word: Vec<char> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let len = split_len(&chars, i);
        if len == 0 {
            word.push(chars[i]);
            i += 1;
            continue;
        }

        let sentence_end = is_trailing_punctuation(&chars[i..]);
        flush_word(&mut word, sentence_end, tokens);
        tokens.push(chars[i..i + len].iter().collect());
        i += len;
    }

    flush_word(&mut word, true, tokens);
}

/// True when the rest of the chunk holds no further word characters
fn is_trailing_punctuation(rest: &[char]) -> bool {
    let mut i = 0;
    while i < rest.len() {
        let len = split_len(rest, i);
        if len == 0 && rest[i] != '.' {
            return false;
        }
        i += len.max(1);
    }
    true
}

/// Emit the pending word, splitting a sentence-final period and contractions
fn flush_word(word: &mut Vec<char>, sentence_end: bool, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }

    let final_period = sentence_end
        && word.len() > 1
        && word[word.len() - 1] == '.'
        && word[word.len() - 2] != '.';
    if final_period {
        word.pop();
    }

    push_with_contractions(word, tokens);
    if final_period {
        tokens.push(".".to_string());
    }
    word.clear();
}

fn push_with_contractions(word: &[char], tokens: &mut Vec<String>) {
    let lower: String = word.iter().collect::<String>().to_lowercase();

    for (whole, at) in SPLIT_WORDS {
        if lower == *whole {
            tokens.push(word[..*at].iter().collect());
            tokens.push(word[*at..].iter().collect());
            return;
        }
    }

    for clitic in CLITICS {
        let n = clitic.chars().count();
        if word.len() <= n {
            continue;
        }
        let (stem, suffix) = word.split_at(word.len() - n);
        let suffix: String = suffix.iter().collect();
        if suffix.to_lowercase() == *clitic && stem[stem.len() - 1] != '\'' {
            tokens.push(stem.iter().collect());
            tokens.push(suffix);
            return;
        }
    }

    tokens.push(word.iter().collect());
}
