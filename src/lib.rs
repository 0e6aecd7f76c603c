pub mod config;
pub mod logging;
pub mod models;
pub mod parsing;
pub mod render;
pub mod scraping;
mod utils;

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Parser};
use tracing::{info, warn};

use config::AppConfig;
use scraping::{base, BerlinMetal, VenueScraper};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "List upcoming metal concerts in Berlin")]
pub struct Cli {
    /// Print the events as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Indent the JSON output.
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Parse a saved listing page instead of fetching it.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Listing page to fetch.
    #[arg(long, value_name = "URL", env = "METAL_GIGS_URL")]
    pub url: Option<String>,

    /// Config file; defaults to config.json in the user data directory.
    #[arg(long, value_name = "FILE", env = "METAL_GIGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    pub write_config: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = &cli.url {
        config.source_url = url.clone();
    }

    if cli.write_config {
        let path = cli.config.clone().unwrap_or_else(utils::config_path);
        config::write_config(&path, &config)?;
        info!(path = %path.display(), "wrote config");
        return Ok(());
    }

    let tz = config.tz()?;
    let scraper = BerlinMetal::new(config.source_url.clone());
    let fragments = match &cli.input {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("unable to read {}", path.display()))?;
            scraper.extract(&html)?
        }
        None => {
            let client = base::http_client(&config)?;
            scraper.fetch(&client)?
        }
    };

    let now = Utc::now().with_timezone(&tz);
    let report = parsing::parse_fragments(&fragments, &now);
    if !report.skipped.is_empty() {
        warn!(
            skipped = report.skipped.len(),
            parsed = report.events.len(),
            venue = scraper.venue_name(),
            "some concerts could not be parsed"
        );
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", render::render_json(&report.events, cli.pretty)?)?;
    } else {
        write!(stdout, "{}", render::render_text(&report.events))?;
    }
    stdout.flush()?;
    Ok(())
}
