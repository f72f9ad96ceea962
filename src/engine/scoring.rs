/// Scoring functions for search result ranking

/// Compute term frequency: occurrence count normalized by document length.
///
/// # Arguments
/// * `occurrences` - Number of times the term occurs in the document
/// * `doc_len` - Length of the document in tokens
pub fn term_frequency(occurrences: u32, doc_len: usize) -> f64 {
    if doc_len == 0 {
        return 0.0;
    }
    occurrences as f64 / doc_len as f64
}

/// Compute inverse document frequency with +1 smoothing.
///
/// Base-10 logarithm of total corpus size over one plus the number of
/// documents containing the term. The smoothing keeps the divisor nonzero
/// for unindexed terms; it also makes the IDF negative when every document
/// contains the term.
///
/// # Arguments
/// * `total_docs` - Total number of documents in the corpus
/// * `docs_with_term` - Number of documents containing the term
pub fn inverse_document_frequency(total_docs: usize, docs_with_term: usize) -> f64 {
    (total_docs as f64 / (1.0 + docs_with_term as f64)).log10()
}

/// Compute the TF-IDF relevance statistic for a term in a document
pub fn tf_idf(occurrences: u32, doc_len: usize, total_docs: usize, docs_with_term: usize) -> f64 {
    term_frequency(occurrences, doc_len) * inverse_document_frequency(total_docs, docs_with_term)
}
