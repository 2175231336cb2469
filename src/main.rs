//! # siteaudit CLI Application
//!
//! This module implements the command-line interface for the siteaudit
//! engine, exposing its two crawl variants as subcommands.
//!
//! ## Key Components
//!
//! - CLI argument parsing with clap
//! - Subcommands for the two crawl variants:
//!   - `audit`: ranked, deduplicated page inventory per site
//!   - `catalog`: keyword-matched course/program pages
//!
//! Seed sites are crawled concurrently, each scoped to its own host with
//! its own frontier. A failed site is logged and skipped; the run only
//! fails when no site produced any data.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

use siteaudit::catalog::{match_catalog, CourseMatch};
use siteaudit::config::{load_seeds, parse_keywords};
use siteaudit::crawler::{
    crawl_site, CrawlerConfig, FrontierMode, HttpExtractor, SiteCrawlResult,
};
use siteaudit::embedder::{HashingEmbedder, DEFAULT_DIMENSIONS};
use siteaudit::report;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Crawl seed websites and produce a ranked, deduplicated content inventory",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crawl the seed sites and export the ranked page inventory
    Audit(AuditArgs),

    /// Crawl the seed sites and export keyword-matched course pages
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// File with one seed URL per line (# comments allowed)
    #[arg(short, long)]
    seeds: PathBuf,

    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum pages to fetch per site
    #[arg(long, default_value = "100")]
    max_pages: usize,

    /// Maximum link depth from each seed
    #[arg(long, default_value = "2")]
    max_depth: u32,

    /// Concurrent fetches per site
    #[arg(long, default_value = "8")]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Prefer course/program links over plain ones
    #[arg(long)]
    priority: bool,

    /// Links admitted per page in priority mode
    #[arg(long, default_value_t = FrontierMode::DEFAULT_TOP_K)]
    top_k: usize,

    /// Pairwise similarity above which two pages count as duplicates
    #[arg(long, default_value = "0.95")]
    duplicate_threshold: f32,

    /// Embedding vector length
    #[arg(long, default_value_t = DEFAULT_DIMENSIONS)]
    dimensions: usize,
}

#[derive(Args, Debug)]
struct AuditArgs {
    #[command(flatten)]
    crawl: CrawlArgs,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    #[command(flatten)]
    crawl: CrawlArgs,

    /// Comma-separated keywords to match against course pages
    #[arg(short, long)]
    keywords: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Audit(args) => audit_command(args).await?,
        Commands::Catalog(args) => catalog_command(args).await?,
    }

    Ok(())
}

#[instrument(skip(args))]
async fn audit_command(args: AuditArgs) -> anyhow::Result<()> {
    let results = run_crawls(&args.crawl).await?;
    if results.iter().all(|site| site.pages.is_empty()) {
        bail!("no data collected from any site");
    }

    let file = File::create(&args.crawl.output)
        .with_context(|| format!("creating {}", args.crawl.output.display()))?;
    report::write_audit_csv(file, &results)?;

    let total: usize = results.iter().map(|site| site.pages.len()).sum();
    println!(
        "Wrote {} pages from {} sites to {}",
        total,
        results.len(),
        args.crawl.output.display()
    );
    Ok(())
}

#[instrument(skip(args))]
async fn catalog_command(args: CatalogArgs) -> anyhow::Result<()> {
    // Validate the keyword list before any network activity.
    let keywords = parse_keywords(&args.keywords)?;

    let results = run_crawls(&args.crawl).await?;
    let matches: Vec<CourseMatch> = results
        .iter()
        .flat_map(|site| match_catalog(site, &keywords))
        .collect();
    if matches.is_empty() {
        bail!("no data collected: no course pages matched the keywords");
    }

    let file = File::create(&args.crawl.output)
        .with_context(|| format!("creating {}", args.crawl.output.display()))?;
    report::write_catalog_csv(file, &matches)?;

    println!(
        "Wrote {} course matches to {}",
        matches.len(),
        args.crawl.output.display()
    );
    Ok(())
}

/// Crawl every seed site concurrently and collect the successful results
async fn run_crawls(args: &CrawlArgs) -> anyhow::Result<Vec<SiteCrawlResult>> {
    let seeds = load_seeds(&args.seeds)?;

    let frontier_mode = if args.priority {
        FrontierMode::Priority { top_k: args.top_k }
    } else {
        FrontierMode::Fifo
    };
    let config = CrawlerConfig::builder()
        .max_pages(args.max_pages)
        .max_depth(args.max_depth)
        .concurrency(args.concurrency)
        .request_timeout(Duration::from_secs(args.timeout_secs))
        .frontier_mode(frontier_mode)
        .duplicate_threshold(args.duplicate_threshold)
        .build();

    let extractor = Arc::new(HttpExtractor::new(&config)?);
    let embedder = Arc::new(HashingEmbedder::new(args.dimensions));

    let progress_bar = ProgressBar::new(seeds.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    progress_bar.set_message("Crawling sites...");

    let mut tasks = JoinSet::new();
    for seed in seeds {
        let extractor = Arc::clone(&extractor);
        let embedder = Arc::clone(&embedder);
        let config = config.clone();
        tasks.spawn(async move {
            let result = crawl_site(&seed, extractor, embedder, &config).await;
            (seed, result)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (seed, result) = joined.context("crawl task failed")?;
        progress_bar.inc(1);
        match result {
            Ok(site) => {
                progress_bar.println(format!(
                    "{}: {} URLs visited, {} pages retained",
                    site.host,
                    site.visited_count,
                    site.pages.len()
                ));
                info!(host = %site.host, pages = site.pages.len(), "site crawled");
                results.push(site);
            }
            Err(err) => {
                progress_bar.println(format!("{seed}: crawl failed ({err})"));
                warn!(seed = %seed, error = %err, "skipping site");
            }
        }
    }
    progress_bar.finish_and_clear();

    if results.is_empty() {
        bail!("no data collected: every site failed to crawl");
    }
    Ok(results)
}
