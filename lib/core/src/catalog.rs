//! Reference catalog types and loading
//!
//! The catalog is the fixed set of HS item names queries are matched against.
//! It is loaded exactly once at startup and never mutated afterwards; the
//! storage format behind [`CatalogRow`] (file, database, spreadsheet export)
//! is the caller's concern.

use crate::error::Result;
use crate::index::CorpusIndex;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// One raw catalog row as supplied by the hosting layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogRow {
    pub item_id: String,
    pub hs_code: String,
    pub display_name: String,
}

/// An immutable catalog entry with its precomputed normalized name.
///
/// Created once at load time; lives as long as the [`CorpusIndex`] built
/// over it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReferenceItem {
    pub item_id: String,
    pub hs_code: String,
    pub display_name: String,
    pub normalized_name: String,
}

impl ReferenceItem {
    fn from_row(row: CatalogRow) -> Self {
        let display_name = row.display_name.trim().to_string();
        let normalized_name = normalize(&display_name);
        Self {
            item_id: row.item_id.trim().to_string(),
            hs_code: row.hs_code.trim().to_string(),
            display_name,
            normalized_name,
        }
    }
}

/// Build a [`CorpusIndex`] from raw catalog rows.
///
/// Row order is preserved and becomes the tie-break order for equal
/// similarity scores, so callers wanting deterministic results across
/// restarts must supply rows in a stable order.
///
/// # Errors
/// [`Error::EmptyCorpus`](crate::Error::EmptyCorpus) when `rows` is empty,
/// [`Error::NoVocabulary`](crate::Error::NoVocabulary) when no term survives
/// normalization of any row.
pub fn load_catalog(rows: Vec<CatalogRow>) -> Result<CorpusIndex> {
    let items: Vec<ReferenceItem> = rows.into_iter().map(ReferenceItem::from_row).collect();
    CorpusIndex::build(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_catalog_builds_index() {
        let rows = vec![
            CatalogRow {
                item_id: "1".to_string(),
                hs_code: "0101".to_string(),
                display_name: "Live horses".to_string(),
            },
            CatalogRow {
                item_id: "2".to_string(),
                hs_code: "0102".to_string(),
                display_name: "Live bovine animals".to_string(),
            },
        ];

        let index = load_catalog(rows).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.vocab_size() > 0);
    }

    #[test]
    fn test_load_catalog_trims_fields_and_normalizes() {
        let rows = vec![CatalogRow {
            item_id: " 7 ".to_string(),
            hs_code: " 5101 ".to_string(),
            display_name: "  Wool, not carded  ".to_string(),
        }];

        let index = load_catalog(rows).unwrap();
        let item = index.item(0);
        assert_eq!(item.item_id, "7");
        assert_eq!(item.hs_code, "5101");
        assert_eq!(item.display_name, "Wool, not carded");
        assert_eq!(item.normalized_name, "wool not carded");
    }

    #[test]
    fn test_load_catalog_empty_fails() {
        assert!(matches!(load_catalog(vec![]), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_catalog_row_deserializes() {
        let row: CatalogRow = serde_json::from_str(
            r#"{"item_id": "1", "hs_code": "0101", "display_name": "Live horses"}"#,
        )
        .unwrap();
        assert_eq!(row.hs_code, "0101");
    }
}
