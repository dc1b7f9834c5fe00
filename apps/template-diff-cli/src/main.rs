//! Template diff command line
//!
//! Reads the extracted field lists of two template versions (JSON arrays of
//! `TemplateField`) and prints the comparison result as JSON on stdout.
//! Logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shared_types::TemplateField;
use template_diff::{CompareConfig, CompareOptions, Comparator, ComparisonResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "template-diff")]
#[command(version, about = "Compare the fields of two PDF form template versions")]
struct Args {
    /// JSON field list of the older version
    #[arg(short, long)]
    source: PathBuf,

    /// JSON field list of the newer version
    #[arg(short, long)]
    target: PathBuf,

    /// TOML comparison settings. Falls back to TEMPLATE_DIFF_* variables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let result = run(&args)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

/// `RUST_LOG` directives when set, `info` otherwise
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run(args: &Args) -> Result<ComparisonResult> {
    let config = match &args.config {
        Some(path) => CompareConfig::from_file(path)?,
        None => CompareConfig::from_env()?,
    };
    let options = CompareOptions::try_from(&config)?;

    let source = load_fields(&args.source)?;
    let target = load_fields(&args.target)?;
    tracing::info!(
        source_fields = source.len(),
        target_fields = target.len(),
        "Comparing {} against {}",
        args.source.display(),
        args.target.display()
    );

    let result = Comparator::new(options)
        .compare(&source, &target)
        .with_context(|| {
            format!(
                "Cannot compare {} with {}",
                args.source.display(),
                args.target.display()
            )
        })?;

    let m = &result.global_metrics;
    tracing::info!(
        added = m.fields_added,
        removed = m.fields_removed,
        modified = m.fields_modified,
        unchanged = m.fields_unchanged,
        "{:.1}% of fields changed",
        m.modification_percentage
    );

    Ok(result)
}

fn load_fields(path: &Path) -> Result<Vec<TemplateField>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read field list: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid field list JSON: {}", path.display()))
}
