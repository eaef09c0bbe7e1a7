use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("expected \"table\" or \"json\", got {other:?}")),
        }
    }
}

/// Parameters for a full report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_path: PathBuf,
    /// Reference date for "recent" filters.
    pub today: NaiveDate,
    pub release_year: i32,
    pub recent_years: u32,
    pub country: String,
    pub top_n: usize,
    pub min_seasons: u32,
    pub director: String,
    pub actor: String,
    pub actor_years: u32,
    pub top_actors: usize,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            data_path: PathBuf::from("netflix/netflix_titles.csv"),
            today: chrono::Utc::now().date_naive(),
            release_year: 2020,
            recent_years: 5,
            country: "India".to_string(),
            top_n: 5,
            min_seasons: 5,
            director: "Rajiv Chilaka".to_string(),
            actor: "Salman Khan".to_string(),
            actor_years: 10,
            top_actors: 10,
            format: OutputFormat::Table,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(e) => bail!("{key}={raw:?}: {e}"),
        },
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("reading {key}")),
    }
}

fn env_date(key: &str, default: NaiveDate) -> Result<NaiveDate> {
    match env::var(key) {
        Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("{key}={raw:?} is not a YYYY-MM-DD date")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("reading {key}")),
    }
}

impl ReportConfig {
    /// Defaults overridden by `NFR_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let d = ReportConfig::default();
        Ok(ReportConfig {
            data_path: env_or("NFR_DATA", d.data_path)?,
            today: env_date("NFR_TODAY", d.today)?,
            release_year: env_or("NFR_YEAR", d.release_year)?,
            recent_years: env_or("NFR_RECENT_YEARS", d.recent_years)?,
            country: env_or("NFR_COUNTRY", d.country)?,
            top_n: env_or("NFR_TOP_N", d.top_n)?,
            min_seasons: env_or("NFR_MIN_SEASONS", d.min_seasons)?,
            director: env_or("NFR_DIRECTOR", d.director)?,
            actor: env_or("NFR_ACTOR", d.actor)?,
            actor_years: env_or("NFR_ACTOR_YEARS", d.actor_years)?,
            top_actors: env_or("NFR_TOP_ACTORS", d.top_actors)?,
            format: env_or("NFR_FORMAT", d.format)?,
        })
    }
}
