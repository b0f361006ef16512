use crate::domain::{CatalogRecord, ChosenAssembly, ResolutionOutcome, ResolutionStatus};
use crate::matcher::{MatchCandidates, find_candidates};
use crate::rank::select_best;

/// Resolves every input name against the unified catalog, one outcome per
/// name in input order. Names are resolved independently; duplicates are
/// resolved again, and a NOT_FOUND never disturbs its neighbours. No I/O
/// happens here, so the same inputs always produce the same outcomes.
pub fn resolve_all(names: &[String], catalog: &[CatalogRecord]) -> Vec<ResolutionOutcome> {
    names
        .iter()
        .map(|name| resolve_one(name, catalog))
        .collect()
}

fn resolve_one(name: &str, catalog: &[CatalogRecord]) -> ResolutionOutcome {
    match find_candidates(name, catalog) {
        MatchCandidates::Exact(candidates) => match select_best(&candidates) {
            Some(best) => outcome(name, ResolutionStatus::Exact, best),
            None => not_found(name),
        },
        MatchCandidates::Genus(candidates) => match select_best(&candidates) {
            // The caller searched for one species but the catalog offered a
            // relative; record which organism actually won.
            Some(best) => outcome(
                name,
                ResolutionStatus::Fallback(best.organism_name.clone()),
                best,
            ),
            None => not_found(name),
        },
        MatchCandidates::Empty => not_found(name),
    }
}

fn outcome(name: &str, status: ResolutionStatus, best: &CatalogRecord) -> ResolutionOutcome {
    ResolutionOutcome {
        name: name.to_string(),
        status,
        chosen: Some(ChosenAssembly::from_record(best)),
    }
}

fn not_found(name: &str) -> ResolutionOutcome {
    ResolutionOutcome {
        name: name.to_string(),
        status: ResolutionStatus::NotFound,
        chosen: None,
    }
}
