use camino::Utf8Path;

use crate::domain::ResolutionOutcome;

pub const REPORT_HEADER: &str = "Target_Species\tStatus\tSource\tAccession\tLevel\tURL";

/// One tab-delimited report line per outcome. Absent metadata renders as
/// `-`, an absent URL as `N/A`; the format is byte-stable because
/// downstream tooling diffs these reports between runs.
pub fn report_line(outcome: &ResolutionOutcome) -> String {
    match &outcome.chosen {
        Some(chosen) => format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            outcome.name, outcome.status, chosen.source, chosen.accession, chosen.level, chosen.url
        ),
        None => format!("{}\t{}\t-\t-\t-\tN/A", outcome.name, outcome.status),
    }
}

pub fn render_report(outcomes: &[ResolutionOutcome]) -> String {
    let mut report = String::from(REPORT_HEADER);
    report.push('\n');
    for outcome in outcomes {
        report.push_str(&report_line(outcome));
        report.push('\n');
    }
    report
}

/// Renders the bash download script: one wget per resolved outcome,
/// named `<accession>.fna.gz` inside the output directory. NCBI ftp
/// paths end in the assembly's directory name, which doubles as the
/// prefix of the genomic FASTA inside it.
pub fn render_script(outcomes: &[ResolutionOutcome], outdir: &Utf8Path) -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("mkdir -p {outdir}\n"));
    for outcome in outcomes {
        let Some(chosen) = &outcome.chosen else {
            continue;
        };
        if !has_usable_url(&chosen.url) {
            continue;
        }
        let base_name = chosen.url.rsplit('/').next().unwrap_or(&chosen.url);
        script.push_str(&format!(
            "echo 'Downloading {} from {}...'\n",
            outcome.name, chosen.source
        ));
        script.push_str(&format!(
            "wget -q --show-progress -O {outdir}/{}.fna.gz {}/{base_name}_genomic.fna.gz\n",
            chosen.accession, chosen.url
        ));
    }
    script
}

// GenBank rows sometimes carry a literal "na" ftp path.
fn has_usable_url(url: &str) -> bool {
    !url.is_empty() && url != "na" && url != "N/A"
}
