pub mod toml_config;

use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use toml_config::TomlConfig;

pub const SJ_APP_KEY_ENV: &str = "SJ_APP_KEY";

pub const DEFAULT_LANGUAGES: [&str; 13] = [
    "C#",
    "Objective-C",
    "Ruby",
    "Java",
    "C",
    "Typescript",
    "Scala",
    "Go",
    "Swift",
    "C++",
    "PHP",
    "JavaScript",
    "Python",
];

const DEFAULT_HH_BASE_URL: &str = "https://api.hh.ru";
const DEFAULT_SJ_BASE_URL: &str = "https://api.superjob.ru";
const DEFAULT_AREA: u32 = 1; // Moscow
const DEFAULT_PERIOD_DAYS: u32 = 30;
const DEFAULT_TOWN: u32 = 4; // Moscow
const DEFAULT_CATALOGUE: u32 = 48; // development
const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_MAX_PAGES: u32 = 50;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Raw command line. Everything is optional so a TOML config file can fill
/// the gaps; explicit flags always win. See `AppConfig::resolve`.
#[derive(Debug, Clone, Parser)]
#[command(name = "devjobs-stats")]
#[command(about = "Average developer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Languages to query, comma separated (default: the standard 13).
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    #[arg(long)]
    pub hh_base_url: Option<String>,

    #[arg(long)]
    pub sj_base_url: Option<String>,

    /// HeadHunter area code (1 = Moscow).
    #[arg(long)]
    pub area: Option<u32>,

    /// Recency window in days for HeadHunter listings.
    #[arg(long)]
    pub period: Option<u32>,

    /// SuperJob town code (4 = Moscow).
    #[arg(long)]
    pub town: Option<u32>,

    /// SuperJob catalogue code (48 = development).
    #[arg(long)]
    pub catalogue: Option<u32>,

    /// Listings requested per page from both sources.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Hard cap on pages fetched per language per source.
    #[arg(long)]
    pub max_pages: Option<u32>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Extra attempts for transient HTTP failures.
    #[arg(long)]
    pub retry_attempts: Option<u32>,

    /// Optional TOML config file; explicit flags take precedence over it.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved runtime configuration: CLI over TOML over built-in
/// defaults, with the SuperJob credential taken from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub languages: Vec<String>,
    pub hh_base_url: String,
    pub sj_base_url: String,
    pub area: u32,
    pub period: u32,
    pub town: u32,
    pub catalogue: u32,
    pub page_size: u32,
    pub max_pages: u32,
    pub timeout_secs: u64,
    pub retry_attempts: u32,
    pub sj_app_key: String,
    pub verbose: bool,
}

impl AppConfig {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Self::resolve_with(cli, file, std::env::var(SJ_APP_KEY_ENV).ok())
    }

    fn resolve_with(
        cli: CliConfig,
        file: Option<TomlConfig>,
        env_app_key: Option<String>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();

        let languages = if !cli.languages.is_empty() {
            cli.languages
        } else if let Some(languages) = file.languages {
            languages
        } else {
            DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
        };

        let hh = file.headhunter.unwrap_or_default();
        let sj = file.superjob.unwrap_or_default();
        let fetch = file.fetch.unwrap_or_default();

        let sj_app_key = env_app_key
            .filter(|key| !key.trim().is_empty())
            .or(sj.app_key)
            .ok_or_else(|| StatsError::MissingConfigError {
                field: SJ_APP_KEY_ENV.to_string(),
            })?;

        Ok(Self {
            languages,
            hh_base_url: cli
                .hh_base_url
                .or(hh.base_url)
                .unwrap_or_else(|| DEFAULT_HH_BASE_URL.to_string()),
            sj_base_url: cli
                .sj_base_url
                .or(sj.base_url)
                .unwrap_or_else(|| DEFAULT_SJ_BASE_URL.to_string()),
            area: cli.area.or(hh.area).unwrap_or(DEFAULT_AREA),
            period: cli.period.or(hh.period).unwrap_or(DEFAULT_PERIOD_DAYS),
            town: cli.town.or(sj.town).unwrap_or(DEFAULT_TOWN),
            catalogue: cli.catalogue.or(sj.catalogue).unwrap_or(DEFAULT_CATALOGUE),
            page_size: cli
                .page_size
                .or(fetch.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            max_pages: cli
                .max_pages
                .or(fetch.max_pages)
                .unwrap_or(DEFAULT_MAX_PAGES),
            timeout_secs: cli
                .timeout_secs
                .or(fetch.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            retry_attempts: cli
                .retry_attempts
                .or(fetch.retry_attempts)
                .unwrap_or(DEFAULT_RETRY_ATTEMPTS),
            sj_app_key,
            verbose: cli.verbose,
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hh_base_url", &self.hh_base_url)?;
        validate_url("sj_base_url", &self.sj_base_url)?;
        validate_non_empty_string("sj_app_key", &self.sj_app_key)?;
        validate_positive_number("page_size", self.page_size as u64, 1)?;
        validate_range("max_pages", self.max_pages, 1, 200)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 120)?;
        validate_range("retry_attempts", self.retry_attempts, 0, 10)?;

        if self.languages.is_empty() {
            return Err(StatsError::ConfigError {
                message: "language list cannot be empty".to_string(),
            });
        }
        for language in &self.languages {
            validate_non_empty_string("languages", language)?;
        }
        Ok(())
    }
}
