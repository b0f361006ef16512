use crate::domain::CatalogRecord;

/// Candidate subset for one target name, tagged with the pass that
/// produced it. Exact and Genus are never constructed empty.
#[derive(Debug)]
pub enum MatchCandidates<'a> {
    Exact(Vec<&'a CatalogRecord>),
    Genus(Vec<&'a CatalogRecord>),
    Empty,
}

/// Exact organism-name match first (case-sensitive), then a genus-prefix
/// fallback on the first space-separated token. The fallback prefix is
/// anchored at a word boundary: "Zea " must not match "Oryzea sativa".
/// Genus tokens of one or two characters are too ambiguous to fall back on.
pub fn find_candidates<'a>(target: &str, catalog: &'a [CatalogRecord]) -> MatchCandidates<'a> {
    let exact: Vec<&CatalogRecord> = catalog
        .iter()
        .filter(|record| record.organism_name == target)
        .collect();
    if !exact.is_empty() {
        return MatchCandidates::Exact(exact);
    }

    let genus = match target.split(' ').next() {
        Some(token) if token.len() > 2 => token,
        _ => return MatchCandidates::Empty,
    };
    let prefix = format!("{genus} ");
    let genus_matches: Vec<&CatalogRecord> = catalog
        .iter()
        .filter(|record| record.organism_name.starts_with(&prefix))
        .collect();
    if genus_matches.is_empty() {
        MatchCandidates::Empty
    } else {
        MatchCandidates::Genus(genus_matches)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::domain::DataSource;

    fn record(organism: &str) -> CatalogRecord {
        CatalogRecord {
            organism_name: organism.to_string(),
            assembly_accession: "GCA_000000001.1".to_string(),
            refseq_category: "na".to_string(),
            assembly_level: "Scaffold".to_string(),
            ftp_path: String::new(),
            data_source: DataSource::Genbank,
        }
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let catalog = vec![record("Zea mays")];
        assert_matches!(
            find_candidates("Zea mays", &catalog),
            MatchCandidates::Exact(candidates) if candidates.len() == 1
        );
        assert_matches!(find_candidates("zea mays", &catalog), MatchCandidates::Empty);
    }

    #[test]
    fn genus_prefix_is_anchored() {
        let catalog = vec![record("Oryzea sativa")];
        assert_matches!(find_candidates("Zea mays", &catalog), MatchCandidates::Empty);

        let catalog = vec![record("Zea diploperennis")];
        assert_matches!(
            find_candidates("Zea mays", &catalog),
            MatchCandidates::Genus(candidates) if candidates[0].organism_name == "Zea diploperennis"
        );
    }

    #[test]
    fn short_genus_never_falls_back() {
        let catalog = vec![record("Ca certain")];
        assert_matches!(find_candidates("Ca x", &catalog), MatchCandidates::Empty);
        assert_matches!(find_candidates("Ca", &catalog), MatchCandidates::Empty);
    }

    #[test]
    fn single_token_name_can_fall_back() {
        let catalog = vec![record("Escherichia coli")];
        assert_matches!(
            find_candidates("Escherichia", &catalog),
            MatchCandidates::Genus(_)
        );
    }
}
