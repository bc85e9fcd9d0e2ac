//! Human-readable justifications for suggested matches

/// Explain why an item matched a query.
///
/// `normalized_query` is the already-normalized query text; each of its
/// distinct whitespace tokens that substring-matches the lowercased item
/// display name contributes a keyword clause. A category hint, when supplied
/// by the caller, adds a product-type clause. When nothing applies the single
/// fallback clause is returned. Clauses are joined with `"; "`. Total, never
/// fails.
pub fn explain(
    normalized_query: &str,
    item_display_name: &str,
    matched_category_hint: Option<&str>,
) -> String {
    let name_lower = item_display_name.to_lowercase();
    let mut clauses: Vec<String> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for token in normalized_query.split_whitespace() {
        if seen.contains(&token) {
            continue;
        }
        seen.push(token);
        if name_lower.contains(token) {
            clauses.push(format!("keyword '{token}' matches HS item name"));
        }
    }

    if let Some(hint) = matched_category_hint {
        clauses.push(format!("matches product type '{hint}'"));
    }

    if clauses.is_empty() {
        clauses.push("overall semantic similarity with HS item name".to_string());
    }

    clauses.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_clause() {
        let reason = explain("horse animal", "Live horses", None);
        assert_eq!(reason, "keyword 'horse' matches HS item name");
    }

    #[test]
    fn test_multiple_keywords_joined() {
        let reason = explain("live horse", "Live horses", None);
        assert_eq!(
            reason,
            "keyword 'live' matches HS item name; keyword 'horse' matches HS item name"
        );
    }

    #[test]
    fn test_duplicate_tokens_counted_once() {
        let reason = explain("horse horse", "Live horses", None);
        assert_eq!(reason, "keyword 'horse' matches HS item name");
    }

    #[test]
    fn test_category_hint_clause() {
        let reason = explain("horse", "Live horses", Some("livestock"));
        assert_eq!(
            reason,
            "keyword 'horse' matches HS item name; matches product type 'livestock'"
        );
    }

    #[test]
    fn test_fallback_clause() {
        let reason = explain("spaceship", "Live horses", None);
        assert_eq!(reason, "overall semantic similarity with HS item name");
    }

    #[test]
    fn test_empty_query_falls_back() {
        assert_eq!(
            explain("", "Live horses", None),
            "overall semantic similarity with HS item name"
        );
    }

    #[test]
    fn test_display_name_matched_case_insensitively() {
        let reason = explain("wool", "WOOL, not carded", None);
        assert_eq!(reason, "keyword 'wool' matches HS item name");
    }
}
