use tracing::trace;

use crate::domain::{CatalogRecord, DataSource};

// Column positions in assembly_summary.txt; stable across RefSeq and
// GenBank dumps.
const COL_ACCESSION: usize = 0;
const COL_CATEGORY: usize = 4;
const COL_ORGANISM: usize = 7;
const COL_LEVEL: usize = 11;
const COL_FTP: usize = 19;

/// Parses the tab-delimited body of an `assembly_summary.txt` file into
/// records tagged with the given source. NCBI disables quoting in these
/// dumps, so a plain tab split is exact. Comment/header lines start with
/// `#`; rows too short to carry an organism name are skipped.
pub fn parse_summary(text: &str, source: DataSource) -> Vec<CatalogRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        let Some(organism) = cols.get(COL_ORGANISM) else {
            trace!("skipping short summary row ({} columns)", cols.len());
            continue;
        };
        records.push(CatalogRecord {
            organism_name: organism.to_string(),
            assembly_accession: column(&cols, COL_ACCESSION),
            refseq_category: column(&cols, COL_CATEGORY),
            assembly_level: column(&cols, COL_LEVEL),
            ftp_path: column(&cols, COL_FTP),
            data_source: source,
        });
    }
    records
}

fn column(cols: &[&str], index: usize) -> String {
    cols.get(index).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(accession: &str, category: &str, organism: &str, level: &str, ftp: &str) -> String {
        let mut cols = vec![""; 23];
        cols[COL_ACCESSION] = accession;
        cols[COL_CATEGORY] = category;
        cols[COL_ORGANISM] = organism;
        cols[COL_LEVEL] = level;
        cols[COL_FTP] = ftp;
        cols.join("\t")
    }

    #[test]
    fn parses_rows_and_skips_headers() {
        let text = format!(
            "#   See assembly_summary_readme for details.\n# assembly_accession\tbioproject\n{}\n{}\n",
            row(
                "GCF_000001735.4",
                "reference genome",
                "Arabidopsis thaliana",
                "Chromosome",
                "https://ftp.ncbi.nlm.nih.gov/genomes/all/GCF/000/001/735/GCF_000001735.4_TAIR10.1"
            ),
            row("GCF_000005005.2", "na", "Zea mays", "Chromosome", "na"),
        );

        let records = parse_summary(&text, DataSource::Refseq);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].organism_name, "Arabidopsis thaliana");
        assert_eq!(records[0].assembly_accession, "GCF_000001735.4");
        assert_eq!(records[0].refseq_category, "reference genome");
        assert_eq!(records[0].assembly_level, "Chromosome");
        assert_eq!(records[0].data_source, DataSource::Refseq);
        assert_eq!(records[1].ftp_path, "na");
    }

    #[test]
    fn short_rows_are_skipped() {
        let records = parse_summary("GCF_1\tonly\ttwo\tcols\n", DataSource::Genbank);
        assert!(records.is_empty());
    }

    #[test]
    fn empty_text_yields_no_records() {
        assert!(parse_summary("", DataSource::Refseq).is_empty());
    }
}
