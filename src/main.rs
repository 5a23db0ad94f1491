//! @ai:module:intent CLI for comparing Codeforces users
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use cf_compare::{
    config::CompareConfig,
    report::{ComparisonReport, JsonReporter, JsonReporterTrait, ReportGenerator, TableRenderer},
    runner::{CodeforcesClient, ComparisonExecutor, OfflineSource, SubmissionSource},
    submission::SubmissionLoader,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_CONFIG: &str = "cf-compare.toml";
const DEFAULT_DUMP_DIR: &str = "dumps";

#[derive(Parser)]
#[command(name = "cf-compare")]
#[command(about = "Compare Codeforces users' submission statistics side by side")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare up to five handles
    Compare {
        /// Codeforces handles
        handles: Vec<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Read saved dumps from this directory instead of calling the API
        #[arg(long)]
        offline: Option<PathBuf>,

        /// Output directory for reports
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print the table, do not write report files
        #[arg(long)]
        no_reports: bool,
    },

    /// Save one handle's submissions for offline comparison
    Fetch {
        /// Codeforces handle
        handle: String,

        /// Output file (defaults to <dumps>/<handle>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Regenerate reports from a saved results.json
    Report {
        /// Path to results JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,
    },

    /// List saved dumps
    List {
        /// Dump directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cf_compare=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            handles,
            config,
            offline,
            output,
            no_reports,
        } => {
            run_compare(CompareArgs {
                handles,
                config,
                offline,
                output,
                no_reports,
            })
            .await
        }
        Commands::Fetch {
            handle,
            output,
            config,
        } => fetch_dump(handle, output, config).await,
        Commands::Report { results, output } => regenerate_reports(results, output),
        Commands::List { dir, config } => list_dumps(dir, config),
        Commands::Init { output } => init_config(output),
    }
}

struct CompareArgs {
    handles: Vec<String>,
    config: Option<PathBuf>,
    offline: Option<PathBuf>,
    output: Option<PathBuf>,
    no_reports: bool,
}

/// @ai:intent Fetch, aggregate, display, and save a comparison
/// @ai:effects network, fs:write, io
async fn run_compare(args: CompareArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(dir) = args.offline {
        config.paths.offline_dir = Some(dir);
    }

    let outcomes = match config.paths.offline_dir.clone() {
        Some(dir) => {
            tracing::info!("Reading saved dumps from {}", dir.display());
            let source = Arc::new(OfflineSource::new(dir));
            let executor = ComparisonExecutor::from_config(source, &config);
            executor.compare(&args.handles).await?
        }
        None => {
            let client = Arc::new(CodeforcesClient::new(config.api.clone())?);
            let executor = ComparisonExecutor::from_config(client, &config);
            executor.compare(&args.handles).await?
        }
    };

    let report = ComparisonReport::from_outcomes(outcomes);

    println!();
    print!("{}", TableRenderer::default().render(&report));

    if args.no_reports {
        return Ok(());
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
    let output_dir = args
        .output
        .unwrap_or_else(|| config.paths.results_dir.clone())
        .join(timestamp.to_string());

    ReportGenerator::new().generate_all(&report, &output_dir)?;
    Ok(())
}

/// @ai:intent Download one handle's submissions into a dump file
/// @ai:effects network, fs:write
async fn fetch_dump(
    handle: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let client = CodeforcesClient::new(config.api.clone())?;

    let submissions = client.fetch_submissions(handle.trim()).await?;

    let path = output.unwrap_or_else(|| {
        let dir = config
            .paths
            .offline_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_DIR));
        SubmissionLoader::dump_path(&dir, handle.trim())
    });

    SubmissionLoader::new().save_dump(&path, &submissions)?;
    println!("Saved {} submissions to {}", submissions.len(), path.display());
    Ok(())
}

/// @ai:intent Print and rewrite reports from a saved results.json
/// @ai:effects fs:read, fs:write, io
fn regenerate_reports(results_path: PathBuf, output_dir: PathBuf) -> Result<()> {
    let report = JsonReporter::new().load(&results_path)?;

    print!("{}", TableRenderer::default().render(&report));

    ReportGenerator::new().generate_readable(&report, &output_dir)?;
    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent List dumps available for offline comparison
/// @ai:effects fs:read, io
fn list_dumps(dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(d) => d,
        None => load_or_default_config(config_path)?
            .paths
            .offline_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_DIR)),
    };

    let dumps = SubmissionLoader::new().list_dumps(&dir);

    println!("Saved dumps in {} ({}):", dir.display(), dumps.len());
    println!();

    for dump in dumps {
        println!("  {:<24} {}", dump.handle, dump.path.display());
    }

    Ok(())
}

/// @ai:intent Write a default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    CompareConfig::default()
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<CompareConfig> {
    match path {
        Some(p) => CompareConfig::load(&p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG);

            if default_path.exists() {
                Ok(CompareConfig::load(default_path)?)
            } else {
                Ok(CompareConfig::default())
            }
        }
    }
}
