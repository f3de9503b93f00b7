//! Fuzzy search: corpus normalization, scoring, ranking

mod corpus;
mod fuzzy;
mod rank;

pub use corpus::{RecordKind, SearchRecord, build_corpus, free_record, structured_record};
pub use fuzzy::partial_ratio;
pub use rank::{DEFAULT_THRESHOLD, SearchHit, UNIFIED_THRESHOLD, rank};
