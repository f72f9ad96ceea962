//! The search engine: index construction and TF-IDF-ranked lookup.

pub mod index;
pub mod scoring;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::config::{EngineConfig, RankOrder};
use crate::models::{Corpus, DocId};
use crate::tokenizer::Tokenizer;
use self::index::{build_index, InvertedIndex, OccurrenceTable};

/// In-memory inverted-index search engine over a fixed corpus.
///
/// All index structures are built in one pass at construction and are
/// read-only afterwards, so shared references can serve queries from any
/// number of callers.
///
/// A query is treated as a single opaque key: it is lowercased as a whole
/// and looked up as one term, never split into words. "Not found" is an
/// empty result, not an error; both building and searching are total over
/// arbitrary string input.
pub struct SearchEngine {
    corpus: Corpus,
    config: EngineConfig,
    inverted: InvertedIndex,
    occurrences: OccurrenceTable,
    doc_lengths: Vec<usize>,
}

impl SearchEngine {
    /// Build an engine over `corpus` with default configuration
    pub fn new(corpus: Corpus) -> Self {
        Self::build(corpus, EngineConfig::default())
    }

    /// Build an engine over `corpus`.
    ///
    /// Tokenizes every document and populates the inverted index (keyed by
    /// lowercased term), the occurrence table (keyed by raw token), and the
    /// per-document token counts. Cannot fail for any corpus.
    pub fn build(corpus: Corpus, config: EngineConfig) -> Self {
        let tokenizer = Tokenizer::new();
        let built = build_index(&corpus, &tokenizer);
        debug!(
            docs = corpus.len(),
            terms = built.inverted.term_count(),
            "index built"
        );
        Self {
            corpus,
            config,
            inverted: built.inverted,
            occurrences: built.occurrences,
            doc_lengths: built.doc_lengths,
        }
    }

    /// Search for documents matching `query`.
    ///
    /// The query is lowercased as a whole and looked up as a single term.
    /// An unmatched query returns an empty vector; a single match is
    /// returned as-is; two or more matches are ranked by TF-IDF, ascending
    /// by default (see [`RankOrder`]), ties keeping corpus insertion order.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let key = query.to_lowercase();

        let Some(posting) = self.inverted.get(&key) else {
            trace!(query, "no matching term");
            return Vec::new();
        };

        let mut hits: Vec<DocId> = posting.doc_ids().to_vec();
        if hits.len() > 1 {
            self.rank(&key, &mut hits);
        }
        trace!(query, hits = hits.len(), "query served");

        hits.into_iter().filter_map(|id| self.corpus.get(id)).collect()
    }

    /// Number of documents in the corpus
    pub fn doc_count(&self) -> usize {
        self.corpus.len()
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.inverted.term_count()
    }

    /// Length in tokens of the given document
    pub fn document_length(&self, doc: DocId) -> Option<usize> {
        self.doc_lengths.get(doc).copied()
    }

    /// Sort matching documents by TF-IDF score. Both directions use a
    /// stable sort, so equal scores keep posting (corpus insertion) order.
    fn rank(&self, word: &str, hits: &mut [DocId]) {
        match self.config.rank_order {
            RankOrder::Ascending => {
                hits.sort_by_key(|&doc| OrderedFloat(self.score(word, doc)));
            }
            RankOrder::Descending => {
                hits.sort_by_key(|&doc| std::cmp::Reverse(OrderedFloat(self.score(word, doc))));
            }
        }
    }

    /// TF-IDF for `word` in `doc`, with `word` taken verbatim.
    ///
    /// The caller reaches this with the lowercased query key, while the
    /// occurrence table is keyed by raw tokens. A term that only ever
    /// appears in the corpus with different casing therefore scores 0 here
    /// even though the case-insensitive index lookup matched it.
    fn score(&self, word: &str, doc: DocId) -> f64 {
        let occurrences = self.occurrences.count(word, doc);
        let doc_len = self.doc_lengths.get(doc).copied().unwrap_or(0);
        let docs_with_term = self.occurrences.documents_containing(word);
        scoring::tf_idf(occurrences, doc_len, self.corpus.len(), docs_with_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(docs: &[&str]) -> SearchEngine {
        SearchEngine::new(Corpus::new(docs.iter().copied()))
    }

    #[test]
    fn test_unmatched_query_empty() {
        let engine = engine(&["the brown fox"]);
        assert!(engine.search("zebra").is_empty());
        assert!(engine.search("").is_empty());
    }

    #[test]
    fn test_single_match_returned_unranked() {
        let engine = engine(&["the brown fox", "the lazy dog"]);
        assert_eq!(engine.search("fox"), vec!["the brown fox"]);
    }

    #[test]
    fn test_query_lowercased_as_whole() {
        let engine = engine(&["the brown fox"]);
        assert_eq!(engine.search("FOX"), vec!["the brown fox"]);
        // Multi-word queries are one opaque key and simply miss
        assert!(engine.search("brown fox").is_empty());
    }

    #[test]
    fn test_ascending_rank_puts_lowest_score_first() {
        // "fox" is in 2 of 4 docs: idf = log10(4/3) > 0, so the sparser
        // document (lower tf) sorts first
        let engine = engine(&[
            "fox fox fox den",
            "a fox walked past the barn today",
            "no relevant animals here",
            "still nothing",
        ]);
        assert_eq!(
            engine.search("fox"),
            vec!["a fox walked past the barn today", "fox fox fox den"]
        );
    }

    #[test]
    fn test_descending_rank_reverses() {
        let corpus = Corpus::new([
            "fox fox fox den",
            "a fox walked past the barn today",
            "no relevant animals here",
            "still nothing",
        ]);
        let engine = SearchEngine::build(
            corpus,
            EngineConfig {
                rank_order: RankOrder::Descending,
            },
        );
        assert_eq!(
            engine.search("fox"),
            vec!["fox fox fox den", "a fox walked past the barn today"]
        );
    }

    #[test]
    fn test_tied_scores_keep_insertion_order() {
        // Both docs have one "fox" among four tokens: identical scores
        let engine = engine(&["fox one two three", "fox four five six", "other doc"]);
        assert_eq!(
            engine.search("fox"),
            vec!["fox one two three", "fox four five six"]
        );
    }

    #[test]
    fn test_capitalized_corpus_scores_zero_but_matches() {
        // "Rust" is indexed under "rust", but the occurrence table has no
        // lowercase entry, so every score is 0 and insertion order holds
        let engine = engine(&["Rust Rust tooling", "Rust language", "something else"]);
        assert_eq!(
            engine.search("rust"),
            vec!["Rust Rust tooling", "Rust language"]
        );
    }

    #[test]
    fn test_empty_token_reachable_by_empty_query() {
        // A delimiter-initial document indexes a leading empty token, which
        // the empty query then finds
        let engine = engine(&["!bang", "plain words"]);
        assert_eq!(engine.search(""), vec!["!bang"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let engine = engine(&["the brown fox", "the red fox", "the dog"]);
        let first = engine.search("fox");
        let second = engine.search("fox");
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_accessors() {
        let engine = engine(&["the brown fox", "the dog"]);
        assert_eq!(engine.doc_count(), 2);
        // the, brown, fox, dog
        assert_eq!(engine.term_count(), 4);
        assert_eq!(engine.document_length(0), Some(3));
        assert_eq!(engine.document_length(7), None);
    }

    #[test]
    fn test_empty_corpus() {
        let engine = engine(&[]);
        assert_eq!(engine.doc_count(), 0);
        assert!(engine.search("anything").is_empty());
    }
}
