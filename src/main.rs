use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use seo_engine::config::{OutputFormat, SeoConfig};
use seo_engine::history::{record_analysis, HistoryStats, HistoryStore, JsonlHistory};
use seo_engine::view::{clipboard_text, export_json, ReportView};
use seo_engine::{analyze, AnalysisResult, AnalyzeOptions};

#[derive(Parser)]
#[command(
    name = "seo-engine",
    about = "Analyze prose for SEO: keywords, readability, title and meta description",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Target keywords, comma separated (derived from the text if omitted)
    #[arg(short, long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (defaults to ./.seo-engine.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// History log path (overrides the config file)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not record this run in the history log
    #[arg(long)]
    no_history: bool,

    /// Print history stats and exit
    #[arg(long)]
    stats: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => SeoConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SeoConfig::discover(&std::env::current_dir()?),
    };
    let format = cli.format.unwrap_or(config.output.format);
    let record = config.history.enabled && !cli.no_history;
    let mut store = JsonlHistory::new(cli.history.clone().unwrap_or(config.history.path));

    let mut stdout = io::stdout().lock();

    if cli.stats {
        let stats = store
            .stats()
            .with_context(|| format!("Failed to read history {}", store.path().display()))?;
        writeln!(stdout, "{}", serde_json::to_string_pretty(&stats)?)?;
        return Ok(());
    }

    let options = AnalyzeOptions::with_keywords(
        cli.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty()),
    );

    for text in read_inputs(&cli.files)? {
        let result = analyze(&text, &options);
        let stats = if record {
            record_analysis(&mut store, &text, &options.keywords, &result)
        } else {
            None
        };
        emit(&mut stdout, format, &result, stats)?;
    }
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(vec![input]);
    }
    files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Error reading {}", path.display()))
        })
        .collect()
}

fn emit(
    out: &mut impl Write,
    format: OutputFormat,
    result: &AnalysisResult,
    stats: Option<HistoryStats>,
) -> Result<()> {
    match format {
        OutputFormat::Text => ReportView::build(result).with_history(stats).render(out)?,
        OutputFormat::Json => writeln!(out, "{}", export_json(result)?)?,
        OutputFormat::Copy => writeln!(out, "{}", clipboard_text(result))?,
    }
    Ok(())
}
