use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CuttleError, Result};

/// Dense document identifier: the document's position in corpus insertion
/// order.
pub type DocId = usize;

/// Insertion-ordered, duplicate-free collection of documents.
///
/// A document is an opaque string identified by its exact content; adding
/// the same string twice collapses to one entry. The corpus is fixed once
/// constructed, there is no add/remove API.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    docs: Vec<String>,
}

impl Corpus {
    /// Build a corpus from document strings, collapsing exact duplicates and
    /// keeping first-occurrence order.
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut docs = Vec::new();
        for doc in documents {
            let doc = doc.into();
            if seen.insert(doc.clone()) {
                docs.push(doc);
            }
        }
        Self { docs }
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Get a document's text by id
    pub fn get(&self, id: DocId) -> Option<&str> {
        self.docs.get(id).map(String::as_str)
    }

    /// Iterate documents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> {
        self.docs.iter().enumerate().map(|(id, doc)| (id, doc.as_str()))
    }
}

/// Inverted index entry: the documents containing one indexed term, in
/// corpus insertion order, each listed once.
#[derive(Clone, Debug)]
pub struct PostingList {
    term: String,
    doc_ids: Vec<DocId>,
}

impl PostingList {
    pub fn new(term: String) -> Self {
        Self {
            term,
            doc_ids: Vec::new(),
        }
    }

    /// Add a document to this posting list; already-listed documents are
    /// left in place so insertion order is preserved.
    pub fn add_document(&mut self, doc_id: DocId) {
        if !self.doc_ids.contains(&doc_id) {
            self.doc_ids.push(doc_id);
        }
    }

    /// The indexed (lowercased) term this list belongs to
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Matching documents in insertion order
    pub fn doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Document frequency: number of documents listing this term
    pub fn document_frequency(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }
}

/// A document paired with a display label, as stored in JSON corpus files
/// consumed by the interactive shell. The engine itself never sees labels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledDocument {
    pub label: String,
    pub text: String,
}

impl LabeledDocument {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Load a labeled corpus from a JSON file containing an array of
    /// `{"label": ..., "text": ...}` objects.
    pub fn load_file(path: &Path) -> Result<Vec<LabeledDocument>> {
        let data = std::fs::read_to_string(path)?;
        let docs: Vec<LabeledDocument> = serde_json::from_str(&data)?;
        if docs.is_empty() {
            return Err(CuttleError::InvalidCorpus(
                "corpus file contains no documents".to_string(),
            ));
        }
        Ok(docs)
    }
}
