use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Provenance of a catalog record. Assigned at ingestion, never inferred
/// from record content, and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    Refseq,
    Genbank,
}

impl DataSource {
    /// Tag used in reports and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            DataSource::Refseq => "REFSEQ",
            DataSource::Genbank => "GENBANK",
        }
    }

    /// Directory component under `ftp.ncbi.nlm.nih.gov/genomes/`.
    pub fn ftp_dir(&self) -> &'static str {
        match self {
            DataSource::Refseq => "refseq",
            DataSource::Genbank => "genbank",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelection {
    Refseq,
    Genbank,
    Both,
}

impl SourceSelection {
    pub fn sources(&self) -> Vec<DataSource> {
        match self {
            SourceSelection::Refseq => vec![DataSource::Refseq],
            SourceSelection::Genbank => vec![DataSource::Genbank],
            SourceSelection::Both => vec![DataSource::Refseq, DataSource::Genbank],
        }
    }
}

/// One row of an NCBI `assembly_summary.txt` file. Fields are kept as the
/// free text found in the file; accession is unique only within a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub organism_name: String,
    pub assembly_accession: String,
    pub refseq_category: String,
    pub assembly_level: String,
    pub ftp_path: String,
    pub data_source: DataSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "matched")]
pub enum ResolutionStatus {
    Exact,
    Fallback(String),
    NotFound,
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStatus::Exact => write!(f, "EXACT_MATCH"),
            ResolutionStatus::Fallback(matched) => write!(f, "FALLBACK ({matched})"),
            ResolutionStatus::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// The winning record's fields, as they land in the report and the
/// download script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenAssembly {
    pub source: DataSource,
    pub accession: String,
    pub url: String,
    pub level: String,
}

impl ChosenAssembly {
    pub fn from_record(record: &CatalogRecord) -> Self {
        Self {
            source: record.data_source,
            accession: record.assembly_accession.clone(),
            url: record.ftp_path.clone(),
            level: record.assembly_level.clone(),
        }
    }
}

/// One terminal outcome per input name. Created once by the driver and
/// never mutated; `chosen` is `None` exactly when the status is NotFound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionOutcome {
    pub name: String,
    pub status: ResolutionStatus,
    pub chosen: Option<ChosenAssembly>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rendering() {
        assert_eq!(ResolutionStatus::Exact.to_string(), "EXACT_MATCH");
        assert_eq!(
            ResolutionStatus::Fallback("Zea mays".to_string()).to_string(),
            "FALLBACK (Zea mays)"
        );
        assert_eq!(ResolutionStatus::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn source_tags() {
        assert_eq!(DataSource::Refseq.to_string(), "REFSEQ");
        assert_eq!(DataSource::Genbank.ftp_dir(), "genbank");
    }

    #[test]
    fn source_selection_expansion() {
        assert_eq!(
            SourceSelection::Both.sources(),
            vec![DataSource::Refseq, DataSource::Genbank]
        );
        assert_eq!(SourceSelection::Genbank.sources(), vec![DataSource::Genbank]);
    }
}
