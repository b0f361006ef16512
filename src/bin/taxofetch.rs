use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use taxofetch::app::{App, RunOptions, RunResult};
use taxofetch::domain::SourceSelection;
use taxofetch::error::TaxofetchError;
use taxofetch::groups::GroupAliases;
use taxofetch::ncbi::NcbiHttpClient;
use taxofetch::output::JsonOutput;
use taxofetch::store::SummaryStore;

#[derive(Parser)]
#[command(name = "taxofetch")]
#[command(about = "Download genomes from NCBI (RefSeq & GenBank) for a species list")]
#[command(version, author)]
struct Cli {
    /// File with species names (one per line)
    #[arg(short, long)]
    input: Utf8PathBuf,

    /// Taxonomic group to search (plant, weeds, insects, fungi, bacteria, mammals, ...)
    #[arg(short, long)]
    group: String,

    /// Directory the generated script downloads into (default: {group}_genomes)
    #[arg(short, long)]
    outdir: Option<Utf8PathBuf>,

    /// Catalog to search; 'both' merges RefSeq and GenBank and prefers RefSeq on quality ties
    #[arg(short, long, value_enum, default_value = "both")]
    source: SourceSelection,

    /// Force re-download of cached NCBI assembly summary files
    #[arg(long)]
    clean: bool,

    /// JSON file overriding the built-in group alias table
    #[arg(long)]
    aliases: Option<Utf8PathBuf>,

    /// Print the run result as JSON instead of a human summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<TaxofetchError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &TaxofetchError) -> u8 {
    match error {
        TaxofetchError::InputNotFound(_) | TaxofetchError::NoCatalogData(_) => 2,
        TaxofetchError::SummaryHttp(_) | TaxofetchError::SummaryStatus { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let aliases = match &cli.aliases {
        Some(path) => GroupAliases::from_json_file(path.as_std_path()).into_diagnostic()?,
        None => GroupAliases::default(),
    };

    let client = NcbiHttpClient::new().into_diagnostic()?;
    let store = SummaryStore::new().into_diagnostic()?;
    let app = App::new(client, store, aliases);

    let options = RunOptions {
        input: cli.input,
        group: cli.group,
        outdir: cli.outdir,
        source: cli.source,
        clean: cli.clean,
    };
    let result = app.run(&options).into_diagnostic()?;

    if cli.json {
        JsonOutput::print_run(&result).into_diagnostic()?;
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn print_summary(result: &RunResult) {
    let green = "\x1b[32m";
    let cyan = "\x1b[36m";
    let reset = "\x1b[0m";

    println!(
        "{green}Done. Found {}/{} species in group '{}'.{reset}",
        result.found, result.total, result.group
    );
    println!("{cyan}View report: {}{reset}", result.report_path);
    println!("{cyan}Run download: bash {}{reset}", result.script_path);
}
