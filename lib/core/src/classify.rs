//! The externally-visible classification entry point
//!
//! Ties the pipeline together: normalize -> rank -> explain. The category is
//! folded into the same bag of terms as the product name, not weighted as a
//! separate signal.

use crate::error::Result;
use crate::explain::explain;
use crate::index::CorpusIndex;
use crate::normalize::normalize;
use crate::rank::rank;
use serde::Serialize;

/// One suggested HS code with its similarity score and justification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    pub item_id: String,
    pub hs_code: String,
    pub similarity_score: f32,
    pub reason: String,
}

/// Suggest the `top_n` most plausible HS codes for a product description.
///
/// `product_name` and `category` are each normalized and concatenated into a
/// single query string. Empty or out-of-vocabulary inputs are valid
/// zero-signal queries and still produce results.
///
/// # Errors
/// [`Error::InvalidTopN`](crate::Error::InvalidTopN) when `top_n` is zero.
pub fn classify(
    index: &CorpusIndex,
    product_name: &str,
    category: &str,
    top_n: usize,
) -> Result<Vec<MatchResult>> {
    let query = format!("{} {}", normalize(product_name), normalize(category));
    let query = query.trim().to_string();

    let results = rank(index, &query, top_n)?
        .into_iter()
        .map(|ranked| {
            let item = index.item(ranked.position);
            MatchResult {
                item_id: item.item_id.clone(),
                hs_code: item.hs_code.clone(),
                similarity_score: ranked.score,
                reason: explain(&query, &item.display_name, None),
            }
        })
        .collect();

    Ok(results)
}
