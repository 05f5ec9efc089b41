//! Loading operator overrides from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use vrec_model::OverrideStore;

/// Load an override store from a JSON file.
///
/// The file maps `"<group key>\u{1f}<combination key>"` to
/// `{ "price": "...", "quantity": "..." }` objects, the store's own
/// serialized form.
pub fn read_overrides(path: &Path) -> Result<OverrideStore> {
    let file =
        File::open(path).with_context(|| format!("open override file {}", path.display()))?;
    let store: OverrideStore = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse override file {}", path.display()))?;
    info!(path = %path.display(), entries = store.len(), "loaded overrides");
    Ok(store)
}
