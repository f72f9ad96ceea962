use std::collections::HashMap;

use regex::Regex;

/// Splits text into maximal runs of Unicode letter characters.
///
/// Runs of one or more non-letter characters act as delimiters. Case is
/// preserved in the emitted tokens; lowercasing for index keys is the
/// caller's job. Tokenization is a pure function of the input text.
pub struct Tokenizer {
    delimiter: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // \P{L}+ is a constant pattern, compilation cannot fail
            delimiter: Regex::new(r"\P{L}+").expect("valid delimiter pattern"),
        }
    }

    /// Tokenize `text` into letter runs.
    ///
    /// A document that begins with a delimiter yields a single leading empty
    /// token, and the empty or all-delimiter document yields exactly one
    /// empty token; trailing delimiter runs yield nothing.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = self.delimiter.split(text).map(str::to_string).collect();
        // Delimiter runs are merged, so at most one trailing empty remains.
        if tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        tokens
    }

    /// Length of a document in tokens
    pub fn document_length(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }

    /// Per-token occurrence counts for `text`, keyed by the token exactly as
    /// extracted (no case folding).
    pub fn occurrence_counts(&self, text: &str) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for token in self.tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
