//! Ranking of search records.

use super::corpus::SearchRecord;
use super::fuzzy::partial_ratio;

/// Default minimum score for single-kind search.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Default minimum score for unified cross-kind search.
pub const UNIFIED_THRESHOLD: u8 = 80;

/// A search record paired with its similarity score.
#[derive(Debug, Clone)]
pub struct SearchHit {
    record: SearchRecord,
    score: u8,
}

impl SearchHit {
    /// Returns the matched record.
    pub fn record(&self) -> &SearchRecord {
        &self.record
    }

    /// Returns the similarity score, 0-100.
    pub fn score(&self) -> u8 {
        self.score
    }
}

/// Ranks `records` against `query`, dropping everything below `threshold`.
///
/// Query and record text are both lowercased before scoring. Results come
/// back ordered by score descending, then last-modified descending; the
/// sort is stable over the corpus order, so identical inputs always yield
/// identical output.
///
/// An empty (or whitespace-only) query short-circuits into browse mode:
/// every record comes back unfiltered, most recently modified first, each
/// reported at score 100. That ordering is the default browse order, not
/// a relevance order.
pub fn rank(records: Vec<SearchRecord>, query: &str, threshold: u8) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        let mut hits: Vec<SearchHit> = records
            .into_iter()
            .map(|record| SearchHit { record, score: 100 })
            .collect();
        hits.sort_by(|a, b| b.record.updated().cmp(&a.record.updated()));
        return hits;
    }

    let mut hits: Vec<SearchHit> = records
        .into_iter()
        .filter_map(|record| {
            let score = partial_ratio(&query, &record.text().to_lowercase());
            (score >= threshold).then_some(SearchHit { record, score })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.record.updated().cmp(&a.record.updated()))
    });
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FreeNote, Note, Step};
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn structured(id: i64, title: &str, code: &str, updated: i64) -> SearchRecord {
        let steps = vec![Step::new(1, id, None, None, Some(code.into()), None, 0)];
        let note = Note::new(id, title, None, None, ts(0), ts(updated), steps);
        super::super::corpus::structured_record(&note)
    }

    fn free(id: i64, title: &str, content: &str, updated: i64) -> SearchRecord {
        let note = FreeNote::new(id, title, content, None, ts(0), ts(updated));
        super::super::corpus::free_record(&note)
    }

    fn sample_corpus() -> Vec<SearchRecord> {
        vec![
            structured(1, "Fix oven", "preheat 350", 10),
            free(2, "Grocery list", "<p>milk</p>", 20),
        ]
    }

    #[test]
    fn verbatim_substring_match_scores_100() {
        let hits = rank(sample_corpus(), "oven", 60);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record().id(), 1);
        assert_eq!(hits[0].score(), 100);
    }

    #[test]
    fn below_threshold_records_are_dropped() {
        let hits = rank(sample_corpus(), "oven", 60);
        assert!(hits.iter().all(|h| h.score() >= 60));
        assert!(!hits.iter().any(|h| h.record().id() == 2));
    }

    #[test]
    fn empty_query_returns_all_newest_first() {
        let hits = rank(sample_corpus(), "", 60);
        let ids: Vec<_> = hits.iter().map(|h| h.record().id()).collect();
        assert_eq!(ids, [2, 1]);

        let hits = rank(sample_corpus(), "   ", 60);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hits = rank(sample_corpus(), "OVEN", 60);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score(), 100);
    }

    #[test]
    fn equal_scores_tie_break_on_updated_desc() {
        let corpus = vec![
            structured(1, "Fix oven", "nothing", 10),
            structured(2, "Fix oven", "nothing", 30),
            structured(3, "Fix oven", "nothing", 20),
        ];
        let hits = rank(corpus, "oven", 60);
        let ids: Vec<_> = hits.iter().map(|h| h.record().id()).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let a = rank(sample_corpus(), "list", 60);
        let b = rank(sample_corpus(), "list", 60);
        let ids_a: Vec<_> = a.iter().map(|h| (h.record().id(), h.score())).collect();
        let ids_b: Vec<_> = b.iter().map(|h| (h.record().id(), h.score())).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn higher_threshold_narrows_unified_search() {
        let corpus = vec![
            structured(1, "Deploy service", "kubectl apply", 10),
            free(2, "Deployment diary", "<p>notes on deploys</p>", 20),
        ];
        let loose = rank(corpus.clone(), "deploy", DEFAULT_THRESHOLD);
        let strict = rank(corpus, "deploy", UNIFIED_THRESHOLD);
        assert!(loose.len() >= strict.len());
        assert!(strict.iter().all(|h| h.score() >= UNIFIED_THRESHOLD));
    }
}
