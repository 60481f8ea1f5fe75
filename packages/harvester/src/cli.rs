//! Command-line interface for the harvester.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use leisbr_corpus::UnitKind;
use leisbr_search::Searcher;

use crate::config::{validate_date, DEFAULT_TITLE, PREVIEW_WIDTH};
use crate::error::Result;
use crate::harvester::harvest_source;
use crate::json::{load_snapshot, save_json};

/// LeisBR Harvester - Download Brazilian legislation and query JSON snapshots.
#[derive(Parser)]
#[command(name = "leisbr-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest a law from a URL or local HTML file into a JSON snapshot.
    Harvest {
        /// Source URL (http/https) or local HTML file path
        source: String,

        /// Official title of the law (default: the Constitution)
        #[arg(short, long)]
        title: Option<String>,

        /// Snapshot version date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Output directory (default: data/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full-text search over a snapshot.
    Search {
        /// Path to a JSON snapshot
        snapshot: PathBuf,

        /// Search terms
        terms: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Resolve a citation path and print the unit.
    Cite {
        /// Path to a JSON snapshot
        snapshot: PathBuf,

        /// Citation labels, outermost first (e.g. "Título I" "Art. 1º")
        #[arg(required = true)]
        path: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest {
            source,
            title,
            date,
            output,
        } => harvest_command(&source, title.as_deref(), date.as_deref(), output.as_deref()),
        Commands::Search {
            snapshot,
            terms,
            limit,
        } => search_command(&snapshot, &terms, limit),
        Commands::Cite { snapshot, path } => cite_command(&snapshot, &path),
    }
}

/// Execute the harvest command.
fn harvest_command(
    source: &str,
    title: Option<&str>,
    date: Option<&str>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let title = title.unwrap_or(DEFAULT_TITLE);

    // Use today if no date provided
    let version = date
        .map(String::from)
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    validate_date(&version)?;

    println!(
        "{} {} (version {})",
        style("Harvesting").bold(),
        style(source).cyan(),
        style(&version).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading and classifying...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let law = match harvest_source(source, title) {
        Ok(law) => law,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    // save_json validates the tree before anything is written.
    pb.set_message("Building and saving JSON snapshot...");
    let output_path = match save_json(&law, &version, output) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let artigos = law
        .records
        .iter()
        .filter(|record| record.kind == UnitKind::Artigo)
        .count();
    println!("  Title: {}", style(&law.title).green());
    println!("  Units: {}", law.records.len());
    println!("  Articles: {artigos}");
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Execute the search command.
fn search_command(snapshot: &std::path::Path, terms: &str, limit: usize) -> Result<()> {
    let loaded = load_snapshot(snapshot)?;
    let searcher = Searcher::new(Arc::new(loaded.document));

    let hits = searcher.search_text(terms)?;
    if hits.is_empty() {
        println!("No results for {}", style(terms).cyan());
        return Ok(());
    }

    println!(
        "{} results for {} (showing up to {limit})",
        hits.len(),
        style(terms).cyan()
    );
    println!();
    for hit in hits.iter().take(limit) {
        println!(
            "  {:>3}  {}",
            style(hit.score).yellow(),
            style(searcher.citation_of(hit.id)).bold()
        );
        println!("       {}", preview(&hit.unit.text, PREVIEW_WIDTH));
    }

    Ok(())
}

/// Execute the cite command.
fn cite_command(snapshot: &std::path::Path, path: &[String]) -> Result<()> {
    let loaded = load_snapshot(snapshot)?;
    let searcher = Searcher::new(Arc::new(loaded.document));

    let unit = searcher.query_by_path(path)?;
    println!("{}", style(path.join(", ")).bold());
    println!();
    if unit.text.is_empty() {
        println!("  (no text attached)");
    } else {
        println!("  {}", unit.text);
    }

    Ok(())
}

/// Truncate text to a one-line preview.
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{truncated}…")
}
