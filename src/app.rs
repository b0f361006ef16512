use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::info;

use crate::catalog::merge_catalogs;
use crate::domain::{ResolutionOutcome, SourceSelection};
use crate::error::TaxofetchError;
use crate::groups::GroupAliases;
use crate::loader::CatalogLoader;
use crate::ncbi::SummaryClient;
use crate::report::{render_report, render_script};
use crate::resolve::resolve_all;
use crate::store::{SummaryStore, write_text_atomic};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: Utf8PathBuf,
    pub group: String,
    pub outdir: Option<Utf8PathBuf>,
    pub source: SourceSelection,
    pub clean: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub group: String,
    pub total: usize,
    pub found: usize,
    pub report_path: String,
    pub script_path: String,
    pub outcomes: Vec<ResolutionOutcome>,
}

pub struct App<C: SummaryClient> {
    client: C,
    store: SummaryStore,
    aliases: GroupAliases,
}

impl<C: SummaryClient> App<C> {
    pub fn new(client: C, store: SummaryStore, aliases: GroupAliases) -> Self {
        Self {
            client,
            store,
            aliases,
        }
    }

    /// One full run: load the requested catalogs, resolve every input
    /// name, write the report and the download script. Fails before any
    /// artifact is written when the input file is missing or no source
    /// yielded catalog data.
    pub fn run(&self, options: &RunOptions) -> Result<RunResult, TaxofetchError> {
        let group = self.aliases.resolve(&options.group);
        let names = read_names(&options.input)?;

        let loader = CatalogLoader::new(&self.client, &self.store, options.clean);
        let catalogs = options
            .source
            .sources()
            .into_iter()
            .map(|source| loader.load(source, &group))
            .collect();
        let catalog = merge_catalogs(catalogs, &group)?;
        info!("loaded {} assemblies for group '{group}'", catalog.len());

        info!("matching {} species", names.len());
        let outcomes = resolve_all(&names, &catalog);
        let found = outcomes
            .iter()
            .filter(|outcome| outcome.chosen.is_some())
            .count();

        let outdir = options
            .outdir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(format!("{group}_genomes")));
        let report_path = self.store.root().join(format!("download_report_{group}.log"));
        let script_path = self.store.root().join(format!("run_downloads_{group}.sh"));

        write_text_atomic(&report_path, &render_report(&outcomes))?;
        write_text_atomic(&script_path, &render_script(&outcomes, &outdir))?;

        Ok(RunResult {
            group,
            total: names.len(),
            found,
            report_path: report_path.into_string(),
            script_path: script_path.into_string(),
            outcomes,
        })
    }
}

/// Reads the species list: one name per line, trimmed, blank lines
/// dropped, order and duplicates preserved.
pub fn read_names(path: &Utf8Path) -> Result<Vec<String>, TaxofetchError> {
    if !path.as_std_path().exists() {
        return Err(TaxofetchError::InputNotFound(path.as_std_path().to_path_buf()));
    }
    let content = fs::read_to_string(path.as_std_path())
        .map_err(|_| TaxofetchError::InputRead(path.as_std_path().to_path_buf()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
