//! # hsmatch Core
//!
//! Core matching engine for the hsmatch HS code suggestion service.
//!
//! This crate maps a free-text product description to the most plausible
//! Harmonized System (HS) tariff codes by lexical similarity against a
//! reference catalog of HS item names:
//!
//! - [`normalize`](normalize::normalize) - deterministic text cleaning
//! - [`CorpusIndex`] - TF-IDF index over the catalog (unigrams + bigrams)
//! - [`rank`] - cosine similarity ranking against the index
//! - [`explain`] - keyword-based justification for each suggestion
//! - [`classify`] - the externally-visible entry point
//!
//! ## Example
//!
//! ```rust
//! use hsmatch_core::{classify, load_catalog, CatalogRow};
//!
//! let index = load_catalog(vec![
//!     CatalogRow {
//!         item_id: "1".to_string(),
//!         hs_code: "0101".to_string(),
//!         display_name: "Live horses".to_string(),
//!     },
//!     CatalogRow {
//!         item_id: "2".to_string(),
//!         hs_code: "0102".to_string(),
//!         display_name: "Live bovine animals".to_string(),
//!     },
//! ]).unwrap();
//!
//! let results = classify(&index, "horse", "animal", 2).unwrap();
//! assert_eq!(results[0].hs_code, "0101");
//! ```
//!
//! The index is built exactly once at startup and read-only afterwards; a
//! `&CorpusIndex` can be shared across threads without synchronization.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod explain;
pub mod index;
pub mod normalize;
pub mod rank;

pub use catalog::{load_catalog, CatalogRow, ReferenceItem};
pub use classify::{classify, MatchResult};
pub use error::{Error, Result};
pub use explain::explain;
pub use index::CorpusIndex;
pub use normalize::{ngrams, normalize};
pub use rank::{rank, Ranked};
