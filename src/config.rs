use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{analysis::EASTERN_OREGON_TEAMS, tier, MIN_DISTANCE_MILES};
use crate::models::Division;

/// Application configuration
///
/// Every section has defaults, so the tool runs without any config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub geocode: GeocodeSettings,
    #[serde(default)]
    pub scrape: ScrapeSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
    #[serde(default = "default_tier_green")]
    pub tier_green: f64,
    #[serde(default = "default_tier_yellow")]
    pub tier_yellow: f64,
    #[serde(default = "default_regional_teams")]
    pub regional_teams: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_distance: default_min_distance(),
            tier_green: default_tier_green(),
            tier_yellow: default_tier_yellow(),
            regional_teams: default_regional_teams(),
            top_n: default_top_n(),
        }
    }
}

fn default_min_distance() -> f64 { MIN_DISTANCE_MILES }
fn default_tier_green() -> f64 { tier::TIER_GREEN_MAX }
fn default_tier_yellow() -> f64 { tier::TIER_YELLOW_MAX }
fn default_regional_teams() -> Vec<String> {
    EASTERN_OREGON_TEAMS.iter().map(|t| t.to_string()).collect()
}
fn default_top_n() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_geocode_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_geocode_cache")]
    pub cache_file: String,
    #[serde(default = "default_geocode_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geocode_delay_ms")]
    pub delay_ms: u64,
}

impl Default for GeocodeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_geocode_endpoint(),
            cache_file: default_geocode_cache(),
            user_agent: default_geocode_user_agent(),
            delay_ms: default_geocode_delay_ms(),
        }
    }
}

fn default_geocode_endpoint() -> String { "https://nominatim.openstreetmap.org".to_string() }
fn default_geocode_cache() -> String { "geocode_cache.json".to_string() }
fn default_geocode_user_agent() -> String { "osaa_brackets_scraper".to_string() }
fn default_geocode_delay_ms() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeSettings {
    #[serde(default = "default_osaa_base_url")]
    pub base_url: String,
    #[serde(default = "default_scrape_years")]
    pub years: Vec<u16>,
    #[serde(default = "default_scrape_divisions")]
    pub divisions: Vec<Division>,
    #[serde(default = "default_scrape_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_scrape_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_scrape_user_agent")]
    pub user_agent: String,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            base_url: default_osaa_base_url(),
            years: default_scrape_years(),
            divisions: default_scrape_divisions(),
            delay_ms: default_scrape_delay_ms(),
            timeout_secs: default_scrape_timeout(),
            user_agent: default_scrape_user_agent(),
        }
    }
}

fn default_osaa_base_url() -> String { "https://www.osaa.org".to_string() }
fn default_scrape_years() -> Vec<u16> {
    // No 2020 or 2021 spring playoffs
    (2014..=2019).chain(2022..=2025).collect()
}
fn default_scrape_divisions() -> Vec<Division> { Division::ALL.to_vec() }
fn default_scrape_delay_ms() -> u64 { 500 }
fn default_scrape_timeout() -> u64 { 30 }
fn default_scrape_user_agent() -> String {
    "Mozilla/5.0 (compatible; OSAA Brackets Scraper/1.0)".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_csv_file")]
    pub csv: String,
    #[serde(default = "default_html_file")]
    pub html: String,
    #[serde(default = "default_summary_file")]
    pub summary: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            csv: default_csv_file(),
            html: default_html_file(),
            summary: default_summary_file(),
        }
    }
}

fn default_csv_file() -> String { "osaa_brackets.csv".to_string() }
fn default_html_file() -> String { "brackets.html".to_string() }
fn default_summary_file() -> String { "turnaround_analysis.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

fn env_source() -> Environment {
    // e.g., OSAA__ANALYSIS__MIN_DISTANCE -> analysis.min_distance
    Environment::with_prefix("OSAA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with OSAA__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn thresholds(&self) -> tier::TierThresholds {
        tier::TierThresholds::new(self.analysis.tier_green, self.analysis.tier_yellow)
    }
}
