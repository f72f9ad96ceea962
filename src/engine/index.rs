//! Inverted index and occurrence table construction.
//!
//! One synchronous pass over the corpus builds everything the engine needs
//! to answer queries: postings keyed by lowercased term, occurrence counts
//! keyed by the raw token, and per-document token counts. Nothing here is
//! mutated after the pass completes.

use std::collections::HashMap;

use crate::models::{Corpus, DocId, PostingList};
use crate::tokenizer::Tokenizer;

/// Mapping from lowercased term to the documents containing it.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingList>,
}

impl InvertedIndex {
    /// Look up the posting list for an already-lowercased term
    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

/// Mapping from raw token (exact casing, as extracted) to per-document
/// occurrence counts.
///
/// Note the key asymmetry with [`InvertedIndex`]: postings are keyed by the
/// lowercased term, occurrence counts by the token verbatim. A term that
/// only ever appears capitalized is findable through the index but has no
/// entry here under its lowercase form.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceTable {
    counts: HashMap<String, HashMap<DocId, u32>>,
}

impl OccurrenceTable {
    /// Occurrence count of the exact token `word` in `doc`, 0 when absent
    pub fn count(&self, word: &str, doc: DocId) -> u32 {
        self.counts
            .get(word)
            .and_then(|per_doc| per_doc.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    /// Number of documents containing at least one exact occurrence of
    /// `word`. Equivalent to rescanning every document for a case-sensitive
    /// token match.
    pub fn documents_containing(&self, word: &str) -> usize {
        self.counts.get(word).map_or(0, HashMap::len)
    }
}

/// Everything produced by the build pass
pub struct BuiltIndex {
    pub inverted: InvertedIndex,
    pub occurrences: OccurrenceTable,
    pub doc_lengths: Vec<usize>,
}

/// Build the index structures in a single pass over the corpus.
///
/// Total for any input: tokenization always terminates and map insertions
/// always succeed.
pub fn build_index(corpus: &Corpus, tokenizer: &Tokenizer) -> BuiltIndex {
    let mut postings: HashMap<String, PostingList> = HashMap::new();
    let mut counts: HashMap<String, HashMap<DocId, u32>> = HashMap::new();
    let mut doc_lengths = Vec::with_capacity(corpus.len());

    for (doc_id, text) in corpus.iter() {
        let tokens = tokenizer.tokenize(text);
        doc_lengths.push(tokens.len());

        for token in tokens {
            let key = token.to_lowercase();
            *counts.entry(token).or_default().entry(doc_id).or_insert(0) += 1;
            postings
                .entry(key)
                .or_insert_with_key(|term| PostingList::new(term.clone()))
                .add_document(doc_id);
        }
    }

    BuiltIndex {
        inverted: InvertedIndex { postings },
        occurrences: OccurrenceTable { counts },
        doc_lengths,
    }
}
