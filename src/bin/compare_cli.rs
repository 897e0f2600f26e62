//! Product Compare CLI
//!
//! Runs one search against both catalogs and prints the results.
//!
//! ```bash
//! compare_cli "wireless mouse"
//! compare_cli mouse --source-a flipkart.csv --source-b amazon.csv --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use product_compare::config::DEFAULT_CONFIG_FILE;
use product_compare::{logging, report, search, AppConfig, Catalog, Query};
use std::path::PathBuf;

const EMPTY_QUERY: &str = "Enter a product name to search.\n";

#[derive(Parser)]
#[command(name = "compare_cli")]
#[command(about = "Search two product catalogs and compare the best-rated matches")]
#[command(version)]
struct Args {
    /// Product name (or part of it) to search for
    #[arg(default_value = "")]
    query: String,

    /// JSON config file with source labels and paths
    #[arg(long, env = "PRODUCT_COMPARE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the first source's CSV path
    #[arg(long)]
    source_a: Option<PathBuf>,

    /// Override the second source's CSV path
    #[arg(long)]
    source_b: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Config file (or defaults) with the command line path overrides applied.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(path) = &self.source_a {
            config.source_a.path = path.clone();
        }
        if let Some(path) = &self.source_b {
            config.source_b.path = path.clone();
        }
        Ok(config)
    }
}

/// Load both catalogs and render the search output for `args`.
fn run(args: &Args) -> Result<String> {
    let config = args.resolve_config()?;
    let catalog = Catalog::load(&config).context("Error loading datasets")?;

    let Some(query) = Query::new(&args.query) else {
        return Ok(EMPTY_QUERY.to_string());
    };

    let outcome = search(&catalog.source_a, &catalog.source_b, &query);

    if args.json {
        Ok(format!("{}\n", report::render_json(&outcome)?))
    } else {
        Ok(report::render_text(
            &outcome,
            &config.source_a.label,
            &config.source_b.label,
        ))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    print!("{}", run(&args)?);
    Ok(())
}
