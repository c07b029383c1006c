//! Sitemap crawler main entry point
//!
//! This is the command-line interface for crawling a site and writing its
//! sitemap.

use anyhow::{bail, Context};
use clap::Parser;
use sitemap_crawler::config::{load_config_with_hash, validate, Config, ExtractorKind, ScopeKind};
use sitemap_crawler::sitemap::{load_articles, write_sitemap, SitemapBuilder};
use sitemap_crawler::url::parse_origin;
use sitemap_crawler::SitemapCrawlerError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sitemap Crawler: discover a site's pages and write sitemap.xml
///
/// Crawls every page reachable from the seed URL within the same site, up to
/// the configured depth, and writes the result as a sitemap-protocol XML
/// document. With --articles, the sitemap is built from a supplied article
/// list instead and no crawl runs.
#[derive(Parser, Debug)]
#[command(name = "sitemap-crawler")]
#[command(version)]
#[command(about = "Crawl a site and generate its sitemap.xml", long_about = None)]
struct Cli {
    /// Seed URL to crawl from (read from stdin when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum crawl depth (overrides config)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Output path for the sitemap (overrides config)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Same-site policy (overrides config)
    #[arg(long, value_enum)]
    scope: Option<ScopeArg>,

    /// Use the HTML parser instead of the token scanner for links
    #[arg(long)]
    parse_html: bool,

    /// Build the sitemap from a TOML article list instead of crawling
    #[arg(long, value_name = "FILE", conflicts_with_all = ["url", "depth", "scope", "parse_html"])]
    articles: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ScopeArg {
    Substring,
    Host,
}

impl From<ScopeArg> for ScopeKind {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Substring => ScopeKind::Substring,
            ScopeArg::Host => ScopeKind::Host,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;
    let output = PathBuf::from(&config.output.sitemap_path);
    let builder = SitemapBuilder::new()
        .with_change_frequency(config.sitemap.change_frequency)
        .with_priority(config.sitemap.priority);

    let result = match &cli.articles {
        Some(path) => handle_articles(&builder, path, &output),
        None => handle_crawl(&config, &builder, cli.url.as_deref(), &output).await,
    };

    match result {
        Ok(count) => {
            println!("Sitemap generated at {} ({} URLs)", output.display(), count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Sitemap generation failed: {:#}", e);
            if is_transient_crawl_failure(&e) {
                tracing::warn!("The failure looks transient; rerunning the crawl may succeed");
            }
            Err(e)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_crawler=info,warn"),
            1 => EnvFilter::new("sitemap_crawler=debug,info"),
            2 => EnvFilter::new("sitemap_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file if one was given and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(scope) = cli.scope {
        config.crawler.scope = scope.into();
    }
    if cli.parse_html {
        config.crawler.extractor = ExtractorKind::Html;
    }
    if let Some(output) = &cli.output {
        config.output.sitemap_path = output.to_string_lossy().into_owned();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the default mode: crawl the seed URL and write its sitemap
async fn handle_crawl(
    config: &Config,
    builder: &SitemapBuilder,
    url: Option<&str>,
    output: &Path,
) -> anyhow::Result<usize> {
    let seed = match url {
        Some(url) => url.trim().to_string(),
        None => read_seed_url()?,
    };
    let origin = parse_origin(&seed)?;
    tracing::info!(
        "Crawling {} (host {}) to depth {}",
        seed,
        origin.host_str().unwrap_or_default(),
        config.crawler.max_depth
    );

    // Crawl from the URL as typed; the parsed form would gain a trailing
    // slash on a bare host and stop matching its own links.
    let urls = sitemap_crawler::crawler::crawl(config, &seed).await?;
    let document = builder.build_from_urls(&urls)?;
    write_sitemap(&document, output)?;
    Ok(document.len())
}

fn is_transient_crawl_failure(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<SitemapCrawlerError>(),
        Some(SitemapCrawlerError::Crawl(failure)) if failure.is_transient()
    )
}

/// Handles --articles: build the sitemap from a supplied article list
fn handle_articles(builder: &SitemapBuilder, path: &Path, output: &Path) -> anyhow::Result<usize> {
    let articles = load_articles(path)?;
    tracing::info!("Loaded {} articles from {}", articles.len(), path.display());

    let document = builder.build_from_records(&articles)?;
    write_sitemap(&document, output)?;
    Ok(document.len())
}

/// Reads the seed URL from the first non-empty line of stdin
fn read_seed_url() -> anyhow::Result<String> {
    eprint!("Website URL: ");
    std::io::stderr().flush().ok();

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read URL from stdin")?;
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }

    bail!("No URL given on the command line or stdin")
}
