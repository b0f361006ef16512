use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TaxofetchError {
    #[error("no assembly summary data for group '{0}'; check internet or group name")]
    NoCatalogData(String),

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read input file {0}")]
    InputRead(PathBuf),

    #[error("NCBI summary request failed: {0}")]
    SummaryHttp(String),

    #[error("NCBI returned status {status} for {url}")]
    SummaryStatus { status: u16, url: String },

    #[error("failed to read alias file at {0}")]
    AliasRead(PathBuf),

    #[error("failed to parse alias file: {0}")]
    AliasParse(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
