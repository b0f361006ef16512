use crate::domain::{CatalogRecord, DataSource};

/// Ranking key for one record, ordered as the 4-tuple
/// (category, level, source, accession) with the greatest tuple winning.
/// Source only decides when category and level tie, which encodes the
/// policy "prefer RefSeq only when quality signals are identical"; the
/// accession makes the order total so ranking is a pure function of the
/// candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey<'a> {
    category: u8,
    level: u8,
    source: u8,
    accession: &'a str,
}

impl<'a> RankKey<'a> {
    pub fn of(record: &'a CatalogRecord) -> Self {
        Self {
            category: category_score(&record.refseq_category),
            level: level_score(&record.assembly_level),
            source: source_score(record.data_source),
            accession: &record.assembly_accession,
        }
    }
}

fn category_score(category: &str) -> u8 {
    match category {
        "reference genome" => 3,
        "representative genome" => 2,
        "na" => 1,
        _ => 0,
    }
}

fn level_score(level: &str) -> u8 {
    match level {
        "Complete Genome" => 4,
        "Chromosome" => 3,
        "Scaffold" => 2,
        "Contig" => 1,
        _ => 0,
    }
}

fn source_score(source: DataSource) -> u8 {
    match source {
        DataSource::Refseq => 2,
        DataSource::Genbank => 1,
    }
}

/// Selects the single best record from a candidate subset. Returns `None`
/// only on an empty slice, which callers rule out before invoking.
pub fn select_best<'a>(candidates: &[&'a CatalogRecord]) -> Option<&'a CatalogRecord> {
    candidates
        .iter()
        .copied()
        .max_by_key(|&record| RankKey::of(record))
}
