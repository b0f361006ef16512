use crate::domain::CatalogRecord;
use crate::error::TaxofetchError;

/// Concatenates per-source record collections into the unified catalog.
/// Individual empty collections are fine (an unreachable source is loaded
/// as empty); the merge fails only when every input is empty, because no
/// resolution can succeed without any catalog data.
pub fn merge_catalogs(
    sources: Vec<Vec<CatalogRecord>>,
    group: &str,
) -> Result<Vec<CatalogRecord>, TaxofetchError> {
    if sources.iter().all(|records| records.is_empty()) {
        return Err(TaxofetchError::NoCatalogData(group.to_string()));
    }
    Ok(sources.into_iter().flatten().collect())
}
