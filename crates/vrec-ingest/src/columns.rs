//! Column resolution and keyword-based role detection.

use tracing::debug;

/// Resolve a column selector against the header row.
///
/// A selector is either a header name (case-insensitive, whitespace-trimmed)
/// or a 0-based index literal. Names win over index parsing so a header that
/// happens to be numeric stays addressable.
pub fn resolve_column(headers: &[String], selector: &str) -> Option<usize> {
    let wanted = selector.trim();
    if wanted.is_empty() {
        return None;
    }
    if let Some(index) = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(wanted))
    {
        return Some(index);
    }
    match wanted.parse::<usize>() {
        Ok(index) if index < headers.len() => Some(index),
        _ => None,
    }
}

const PRICE_KEYWORDS: &[&str] = &["price", "cost", "prix", "preis"];
const QUANTITY_KEYWORDS: &[&str] = &["qty", "quantity", "stock", "menge"];

fn detect_by_keywords(headers: &[String], keywords: &[&str]) -> Option<usize> {
    for (index, header) in headers.iter().enumerate() {
        let lowered = header.to_lowercase();
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            debug!(header = %header, index, "detected column role by keyword");
            return Some(index);
        }
    }
    None
}

/// First header whose text contains a price keyword, case-insensitive.
pub fn detect_price_column(headers: &[String]) -> Option<usize> {
    detect_by_keywords(headers, PRICE_KEYWORDS)
}

/// First header whose text contains a quantity keyword, case-insensitive.
pub fn detect_quantity_column(headers: &[String]) -> Option<usize> {
    detect_by_keywords(headers, QUANTITY_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_by_name_case_insensitively() {
        let headers = headers(&["SKU", "Color", "Size"]);
        assert_eq!(resolve_column(&headers, "color"), Some(1));
        assert_eq!(resolve_column(&headers, " SIZE "), Some(2));
        assert_eq!(resolve_column(&headers, "weight"), None);
    }

    #[test]
    fn resolves_by_index_literal() {
        let headers = headers(&["SKU", "Color"]);
        assert_eq!(resolve_column(&headers, "1"), Some(1));
        assert_eq!(resolve_column(&headers, "9"), None);
    }

    #[test]
    fn name_wins_over_index() {
        let headers = headers(&["0", "SKU"]);
        // "0" matches the first header by name, not by parsing.
        assert_eq!(resolve_column(&headers, "0"), Some(0));
    }

    #[test]
    fn detects_price_and_quantity() {
        let headers = headers(&["SKU", "Unit Price", "Stock Qty"]);
        assert_eq!(detect_price_column(&headers), Some(1));
        assert_eq!(detect_quantity_column(&headers), Some(2));
    }

    #[test]
    fn detection_misses_gracefully() {
        let headers = headers(&["SKU", "Color"]);
        assert_eq!(detect_price_column(&headers), None);
        assert_eq!(detect_quantity_column(&headers), None);
    }
}
