//! # hsmatch
//!
//! HS tariff code suggestion by lexical similarity.
//!
//! hsmatch maps a free-text product description to the most plausible
//! Harmonized System (HS) tariff codes by comparing it against a reference
//! catalog of HS item names with TF-IDF weighting and cosine similarity.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install hsmatch
//! hsmatch --catalog hs_catalog.json --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use hsmatch::prelude::*;
//!
//! let index = load_catalog(vec![
//!     CatalogRow {
//!         item_id: "1".to_string(),
//!         hs_code: "0101".to_string(),
//!         display_name: "Live horses".to_string(),
//!     },
//! ]).unwrap();
//!
//! let results = classify(&index, "horse", "animal", 1).unwrap();
//! assert_eq!(results[0].hs_code, "0101");
//! ```
//!
//! ## Crate Structure
//!
//! - [`hsmatch-core`](https://docs.rs/hsmatch-core) - Normalization, TF-IDF indexing, ranking, explanations
//! - [`hsmatch-api`](https://docs.rs/hsmatch-api) - REST API

// Re-export core types
pub use hsmatch_core::{
    classify, explain, load_catalog, ngrams, normalize, rank,
    CatalogRow, CorpusIndex, Error, MatchResult, Ranked, ReferenceItem, Result,
};

// Re-export API
pub use hsmatch_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        classify, explain, load_catalog, normalize, rank,
        AppState, CatalogRow, CorpusIndex, Error, MatchResult, Ranked, ReferenceItem, RestApi,
        Result,
    };
}
