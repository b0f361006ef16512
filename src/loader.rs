use tracing::{debug, info, warn};

use crate::domain::{CatalogRecord, DataSource};
use crate::ncbi::SummaryClient;
use crate::store::SummaryStore;
use crate::summary::parse_summary;

/// Loads the catalog for one (source, group) pair: cached summary file if
/// present, otherwise a fresh download that is cached for the next run.
/// A failed source loads as an empty collection so the other source can
/// still carry the run; only the merger decides that nothing was usable.
pub struct CatalogLoader<'a, C: SummaryClient> {
    client: &'a C,
    store: &'a SummaryStore,
    force_refresh: bool,
}

impl<'a, C: SummaryClient> CatalogLoader<'a, C> {
    pub fn new(client: &'a C, store: &'a SummaryStore, force_refresh: bool) -> Self {
        Self {
            client,
            store,
            force_refresh,
        }
    }

    pub fn load(&self, source: DataSource, group: &str) -> Vec<CatalogRecord> {
        if self.force_refresh {
            if let Err(err) = self.store.remove_summary(source, group) {
                warn!("could not drop cached {source} summary for '{group}': {err}");
            }
        }

        if let Some(text) = self.store.read_summary(source, group) {
            debug!("using cached {source} summary for '{group}'");
            return parse_summary(&text, source);
        }

        info!("downloading {source} summary for '{group}'");
        let text = match self.client.fetch_summary(source, group) {
            Ok(text) => text,
            Err(err) => {
                warn!("error downloading {source} summary for '{group}': {err}");
                return Vec::new();
            }
        };
        if let Err(err) = self.store.write_summary(source, group, &text) {
            warn!("could not cache {source} summary for '{group}': {err}");
        }
        parse_summary(&text, source)
    }
}
