//! Cuttle: a minimal in-memory full-text search engine.
//!
//! Builds an inverted index over a fixed corpus of short text documents and
//! ranks multi-document query results by TF-IDF. The corpus is supplied once
//! at construction; the engine is read-only afterwards.
//!
//! # Example
//!
//! ```
//! use cuttle::{Corpus, EngineConfig, SearchEngine};
//!
//! let corpus = Corpus::new(["the brown fox", "the lazy dog"]);
//! let engine = SearchEngine::build(corpus, EngineConfig::default());
//! let hits = engine.search("fox");
//! assert_eq!(hits, vec!["the brown fox"]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod tokenizer;

pub use config::{EngineConfig, RankOrder};
pub use engine::SearchEngine;
pub use error::{CuttleError, Result};
pub use models::*;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
