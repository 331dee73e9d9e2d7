use crate::domain::error::DomainError;
use crate::infrastructure::forecasting::seasonal_naive::DEFAULT_HISTORY_WEEKS;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DB_PATH: &str = "./pricecast.db";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_MODEL_NAME: &str = "Prophet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecasterKind {
    /// Weekday-seasonal baseline computed from stored history.
    Naive,
    /// Remote model-serving endpoint.
    Http,
}

impl fmt::Display for ForecasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecasterKind::Naive => write!(f, "naive"),
            ForecasterKind::Http => write!(f, "http"),
        }
    }
}

impl FromStr for ForecasterKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(ForecasterKind::Naive),
            "http" => Ok(ForecasterKind::Http),
            _ => Err(format!("Unknown forecaster: {s}")),
        }
    }
}

/// Runtime settings, read once from `PRICECAST_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub addr: String,
    pub forecaster: ForecasterKind,
    pub forecast_url: Option<String>,
    pub model_name: String,
    pub history_weeks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            addr: DEFAULT_ADDR.into(),
            forecaster: ForecasterKind::Naive,
            forecast_url: None,
            model_name: DEFAULT_MODEL_NAME.into(),
            history_weeks: DEFAULT_HISTORY_WEEKS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so parsing can be tested without
    /// touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let defaults = Config::default();

        let forecaster = match lookup("PRICECAST_FORECASTER") {
            Some(v) => v.parse().map_err(DomainError::Config)?,
            None => defaults.forecaster,
        };
        let history_weeks = match lookup("PRICECAST_HISTORY_WEEKS") {
            Some(v) => match v.parse::<usize>() {
                Ok(w) if w > 0 => w,
                _ => {
                    return Err(DomainError::Config(format!(
                        "PRICECAST_HISTORY_WEEKS must be a positive integer, got '{v}'"
                    )))
                }
            },
            None => defaults.history_weeks,
        };
        let forecast_url = lookup("PRICECAST_FORECAST_URL").filter(|u| !u.trim().is_empty());
        if forecaster == ForecasterKind::Http && forecast_url.is_none() {
            return Err(DomainError::Config(
                "PRICECAST_FORECAST_URL must be set when PRICECAST_FORECASTER=http".into(),
            ));
        }

        Ok(Self {
            db_path: lookup("PRICECAST_DB").unwrap_or(defaults.db_path),
            addr: lookup("PRICECAST_ADDR").unwrap_or(defaults.addr),
            forecaster,
            forecast_url,
            model_name: lookup("PRICECAST_MODEL_NAME").unwrap_or(defaults.model_name),
            history_weeks,
        })
    }
}
