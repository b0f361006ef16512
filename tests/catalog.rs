use assert_matches::assert_matches;

use taxofetch::catalog::merge_catalogs;
use taxofetch::domain::{CatalogRecord, DataSource};
use taxofetch::error::TaxofetchError;

fn record(organism: &str, source: DataSource) -> CatalogRecord {
    CatalogRecord {
        organism_name: organism.to_string(),
        assembly_accession: "GCA_000000001.1".to_string(),
        refseq_category: "na".to_string(),
        assembly_level: "Contig".to_string(),
        ftp_path: String::new(),
        data_source: source,
    }
}

#[test]
fn all_empty_sources_are_fatal() {
    let err = merge_catalogs(vec![Vec::new(), Vec::new()], "plant").unwrap_err();
    assert_matches!(err, TaxofetchError::NoCatalogData(group) if group == "plant");
}

#[test]
fn zero_sources_are_fatal() {
    let err = merge_catalogs(Vec::new(), "plant").unwrap_err();
    assert_matches!(err, TaxofetchError::NoCatalogData(_));
}

#[test]
fn one_reachable_source_is_enough() {
    let merged = merge_catalogs(
        vec![Vec::new(), vec![record("Zea mays", DataSource::Genbank)]],
        "plant",
    )
    .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].data_source, DataSource::Genbank);
}

#[test]
fn merge_concatenates_and_preserves_provenance() {
    let merged = merge_catalogs(
        vec![
            vec![record("Zea mays", DataSource::Refseq)],
            vec![
                record("Zea mays", DataSource::Genbank),
                record("Oryza sativa", DataSource::Genbank),
            ],
        ],
        "plant",
    )
    .unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].data_source, DataSource::Refseq);
    assert_eq!(merged[1].data_source, DataSource::Genbank);
    assert_eq!(merged[2].organism_name, "Oryza sativa");
}
