use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pm_base::config::SCAN;
use pm_mod_skeleton::BlenderExtractor;
use pm_mod_tree::{ScanSettings, run_scan};

#[derive(Parser)]
#[command(name = "project-map")]
#[command(about = "Map a project directory, its sources and model skeletons into one JSON file")]
#[command(version)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file (default: project_map.json in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Modeling tool used to read skeletons from .fbx files
    #[arg(long, value_name = "PATH")]
    blender: Option<String>,

    /// Seconds to wait for the modeling tool on each model
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Gitignore-style pattern to leave out of the map (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Log to stderr (-v for a run summary, -vv for per-file detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File name of the running binary, so a copy inside the scanned tree is skipped
fn own_file_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    exe.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet by default: the two banners are the only console output
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = ScanSettings::from_config(&SCAN, cli.root).with_filter(cli.exclude);
    if let Some(output) = cli.output {
        settings = settings.with_output(output);
    }
    if let Some(name) = own_file_name() {
        settings = settings.ignore(name);
    }

    let mut extractor = BlenderExtractor::default();
    if let Some(program) = cli.blender {
        extractor = extractor.with_program(program);
    }
    if let Some(secs) = cli.timeout {
        extractor = extractor.with_timeout_secs(secs);
    }

    println!("Scanning project...");
    run_scan(&settings, &extractor).with_context(|| format!("scan of {} failed", settings.root.display()))?;
    println!("Done. Map written to {}", settings.output.display());

    Ok(())
}
