//! Cosine similarity ranking against the corpus index

use crate::error::{Error, Result};
use crate::index::{l2_normalize, CorpusIndex};
use crate::normalize::{ngrams, normalize};
use ahash::AHashMap;

/// One ranked candidate: catalog position plus cosine similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub position: usize,
    pub score: f32,
}

/// Rank catalog items by cosine similarity to `query_text`.
///
/// The query is normalized and tokenized exactly like the catalog, weighted
/// with the index's IDF table (out-of-vocabulary terms contribute nothing)
/// and L2-normalized, so scores land in `[0, 1]`. Returns the
/// `min(top_n, index.len())` best items, score descending, ties broken by
/// ascending catalog position. A query with zero vocabulary overlap still
/// returns `top_n` results, all scored 0.0 and in catalog order.
///
/// # Errors
/// [`Error::InvalidTopN`] when `top_n` is zero.
pub fn rank(index: &CorpusIndex, query_text: &str, top_n: usize) -> Result<Vec<Ranked>> {
    if top_n == 0 {
        return Err(Error::InvalidTopN(top_n));
    }

    let query = query_vector(index, query_text);

    let mut ranked: Vec<Ranked> = (0..index.len())
        .map(|position| Ranked {
            position,
            score: dot(&query, index.item_vector(position)),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });
    ranked.truncate(top_n);
    Ok(ranked)
}

/// Project a query string into the index's term space as a sparse unit map.
fn query_vector(index: &CorpusIndex, query_text: &str) -> AHashMap<usize, f32> {
    let mut counts: AHashMap<usize, u32> = AHashMap::new();
    for term in ngrams(&normalize(query_text)) {
        if let Some(id) = index.term_id(&term) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut weights: Vec<(usize, f32)> = counts
        .into_iter()
        .map(|(id, tf)| (id, tf as f32 * index.idf(id)))
        .collect();
    l2_normalize(&mut weights);
    weights.into_iter().collect()
}

fn dot(query: &AHashMap<usize, f32>, item: &[(usize, f32)]) -> f32 {
    item.iter()
        .filter_map(|(id, w)| query.get(id).map(|q| q * w))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_catalog, CatalogRow};

    fn row(id: &str, hs_code: &str, name: &str) -> CatalogRow {
        CatalogRow {
            item_id: id.to_string(),
            hs_code: hs_code.to_string(),
            display_name: name.to_string(),
        }
    }

    fn sample_index() -> CorpusIndex {
        load_catalog(vec![
            row("1", "0101", "Live horses"),
            row("2", "0102", "Live bovine animals"),
            row("3", "5101", "Wool, not carded or combed"),
        ])
        .unwrap()
    }

    #[test]
    fn test_rank_invalid_top_n() {
        let index = sample_index();
        assert!(matches!(rank(&index, "x", 0), Err(Error::InvalidTopN(0))));
    }

    #[test]
    fn test_rank_size_law() {
        let index = sample_index();
        for top_n in 1..=6 {
            let results = rank(&index, "live animals", top_n).unwrap();
            assert_eq!(results.len(), top_n.min(index.len()));
        }
    }

    #[test]
    fn test_rank_is_deterministic() {
        let index = sample_index();
        let a = rank(&index, "bovine animals", 3).unwrap();
        let b = rank(&index, "bovine animals", 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let index = sample_index();
        for results in [
            rank(&index, "live bovine animals", 3).unwrap(),
            rank(&index, "wool", 3).unwrap(),
            rank(&index, "completely unrelated text", 3).unwrap(),
        ] {
            for r in results {
                assert!((0.0..=1.0 + 1e-6).contains(&r.score), "score {}", r.score);
            }
        }
    }

    #[test]
    fn test_self_similarity_ranks_first_with_max_score() {
        let index = sample_index();
        let results = rank(&index, "wool not carded or combed", 1).unwrap();
        assert_eq!(results[0].position, 2);
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_query_returns_catalog_order_with_zero_scores() {
        let index = sample_index();
        let results = rank(&index, "zzz qqq", 3).unwrap();
        let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_empty_query_is_valid_zero_signal() {
        let index = sample_index();
        let results = rank(&index, "", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_shared_term_ties_break_by_catalog_position() {
        // "live" matches items 0 and 1; with different idf-weighted names the
        // scores differ, so tie-break is only observable on the zero-score tail
        let index = sample_index();
        let results = rank(&index, "carded", 3).unwrap();
        assert_eq!(results[0].position, 2);
        // remaining two tie at 0.0, catalog order preserved
        assert_eq!(results[1].position, 0);
        assert_eq!(results[2].position, 1);
    }

    #[test]
    fn test_bigram_overlap_boosts_exact_phrases() {
        let index = load_catalog(vec![
            row("1", "0101", "live horses"),
            row("2", "0102", "horses live"),
        ])
        .unwrap();
        let results = rank(&index, "live horses", 2).unwrap();
        // identical unigrams, but only item 0 shares the "live horses" bigram
        assert_eq!(results[0].position, 0);
        assert!(results[0].score > results[1].score);
    }
}
