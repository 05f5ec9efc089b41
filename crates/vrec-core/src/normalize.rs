//! Value normalization.
//!
//! Every comparison, grouping key, and combination key in the engine goes
//! through `comparison_key`, so two cells differing only by case or
//! surrounding whitespace are the same value everywhere.

/// Derive the case/whitespace-insensitive comparison key for a cell value.
///
/// Idempotent: applying it twice yields the same key.
pub fn comparison_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonical display form of a cell value.
pub fn clean(value: &str) -> String {
    value.trim().to_string()
}

/// Canonical display form for identifiers and product names: trimmed with
/// internal hyphens stripped, matching how SKUs are written downstream.
pub fn clean_sku(value: &str) -> String {
    value.trim().replace('-', "")
}

/// Empty after trimming means "absent" throughout the engine.
pub fn is_absent(value: &str) -> bool {
    value.trim().is_empty()
}
