use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::DataSource;
use crate::error::TaxofetchError;

/// On-disk cache for downloaded summary files plus the directory where
/// the report and download script land. Everything lives under one root
/// (the working directory by default) so a run leaves its artifacts next
/// to each other and re-runs reuse the cached summaries.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    root: Utf8PathBuf,
}

impl SummaryStore {
    pub fn new() -> Result<Self, TaxofetchError> {
        let cwd = std::env::current_dir()
            .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
        let root = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|_| TaxofetchError::Filesystem("working directory is not UTF-8".to_string()))?;
        Ok(Self { root })
    }

    pub fn new_with_root(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn summary_path(&self, source: DataSource, group: &str) -> Utf8PathBuf {
        self.root
            .join(format!("summary_{group}_{}.txt", source.ftp_dir()))
    }

    pub fn read_summary(&self, source: DataSource, group: &str) -> Option<String> {
        fs::read_to_string(self.summary_path(source, group).as_std_path()).ok()
    }

    pub fn write_summary(
        &self,
        source: DataSource,
        group: &str,
        text: &str,
    ) -> Result<(), TaxofetchError> {
        write_text_atomic(&self.summary_path(source, group), text)
    }

    pub fn remove_summary(&self, source: DataSource, group: &str) -> Result<(), TaxofetchError> {
        let path = self.summary_path(source, group);
        if path.as_std_path().exists() {
            fs::remove_file(path.as_std_path())
                .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
        }
        Ok(())
    }
}

/// Write-then-rename so a crashed run never leaves a truncated file
/// behind to poison the next one.
pub fn write_text_atomic(path: &Utf8Path, content: &str) -> Result<(), TaxofetchError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs::create_dir_all(parent.as_std_path())
        .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
    let temp = tempfile::Builder::new()
        .prefix("taxofetch")
        .tempfile_in(parent.as_std_path())
        .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
    fs::write(temp.path(), content)
        .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
    temp.persist(path.as_std_path())
        .map_err(|err| TaxofetchError::Filesystem(err.to_string()))?;
    Ok(())
}
