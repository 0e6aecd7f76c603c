use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::utils;

pub const DEFAULT_SOURCE_URL: &str = "https://berlinmetal.eu/";
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";
const DEFAULT_USER_AGENT: &str = "metal-gigs/0.1 (+https://berlinmetal.eu/)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub source_url: String,
    /// IANA zone used to decide which year a listed month falls in.
    pub timezone: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 20,
        }
    }
}

impl AppConfig {
    /// Loads from `path`, or from the per-user data directory when `None`.
    /// A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => read_config(path),
            None => read_config(&utils::config_path()),
        }
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|err| anyhow!("unknown timezone {:?}: {err}", self.timezone))
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))
}

pub fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    utils::ensure_parent(path)
        .with_context(|| format!("unable to create directory for {}", path.display()))?;
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents).with_context(|| format!("unable to write config {}", path.display()))
}
