//! Application configuration from environment variables
//!
//! - `CURRICULUM_CSV_PATH` - curriculum CSV (default `reach_higher_curriculum_all_units.csv`)
//! - `CURRICULUM_SYNONYMS_PATH` - optional JSON synonym file
//! - `CURRICULUM_HOST` / `CURRICULUM_PORT` - listen address (default `127.0.0.1:8501`)
//! - `CURRICULUM_FUZZY_THRESHOLD` - fuzzy score a match must exceed (60-100, default 60)
//!
//! Relative paths are resolved against the current directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{SearchError, SearchResult};
use crate::search::DEFAULT_FUZZY_THRESHOLD;

pub const DEFAULT_CSV_FILE: &str = "reach_higher_curriculum_all_units.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub csv_path: PathBuf,
    pub synonyms_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub fuzzy_threshold: u8,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> SearchResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_vars<F>(lookup: F) -> SearchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let csv_path = resolve(
            &current_dir,
            &var("CURRICULUM_CSV_PATH").unwrap_or_else(|| DEFAULT_CSV_FILE.to_string()),
        );
        let synonyms_path = var("CURRICULUM_SYNONYMS_PATH").map(|p| resolve(&current_dir, &p));
        let host = var("CURRICULUM_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("CURRICULUM_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SearchError::Config(format!("CURRICULUM_PORT '{raw}' is not a port")))?,
            None => DEFAULT_PORT,
        };

        let fuzzy_threshold = match var("CURRICULUM_FUZZY_THRESHOLD") {
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(t) if (DEFAULT_FUZZY_THRESHOLD..=100).contains(&t) => t,
                _ => {
                    return Err(SearchError::Config(format!(
                        "CURRICULUM_FUZZY_THRESHOLD '{raw}' must be {DEFAULT_FUZZY_THRESHOLD}-100"
                    )))
                }
            },
            None => DEFAULT_FUZZY_THRESHOLD,
        };

        Ok(Self {
            csv_path,
            synonyms_path,
            host,
            port,
            fuzzy_threshold,
        })
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
