pub mod document;

pub use document::{Corpus, DocId, LabeledDocument, PostingList};
