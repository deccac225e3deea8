//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "data/movies.json";
const DEFAULT_TEMPLATE_DIR: &str = "templates";

#[derive(Debug, Clone)]
pub struct Config {
    /// Backing catalog file; the extension selects the storage backend.
    pub database_path: PathBuf,
    /// OMDb API key. Without one the add command falls back to manual entry.
    pub omdb_api_key: Option<String>,
    /// Directory holding movies_template.html; the generated page lands
    /// there too.
    pub template_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("MOVIELOG_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH)),
            omdb_api_key: env::var("OMDB_API_KEY").ok().filter(|key| !key.is_empty()),
            template_dir: env::var("MOVIELOG_TEMPLATES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
        }
    }
}
