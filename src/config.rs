use serde::{Deserialize, Serialize};

/// Ordering applied when a query matches more than one document.
///
/// `Ascending` puts the lowest-scoring document first. That is the ordering
/// the original engine shipped with, so it is the default here; `Descending`
/// gives the conventional most-relevant-first ranking. Ties keep corpus
/// insertion order in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    Ascending,
    Descending,
}

/// Engine configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rank_order: RankOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rank_order: RankOrder::Ascending,
        }
    }
}
