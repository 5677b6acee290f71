//! Configuration loading and representation.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the catalog file.
pub const CATALOG_ENV: &str = "SKUSTATUS_CATALOG";

/// Catalog file used when nothing is configured.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub catalog_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl CatalogConfig {
    /// Configuration for an optional explicit catalog path, falling back to
    /// the process environment.
    pub fn from_env(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (environment-shaped key/value source).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(CATALOG_ENV) {
            Some(path) if path.trim().is_empty() => Err(ConfigError::Empty(CATALOG_ENV)),
            Some(path) => Ok(Self {
                catalog_path: PathBuf::from(path),
            }),
            None => {
                tracing::debug!("{CATALOG_ENV} not set; using {DEFAULT_CATALOG_PATH}");
                Ok(Self::default())
            }
        }
    }

    /// An explicit path wins; the environment is only consulted without one.
    pub fn resolve(
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Ok(Self::default().with_catalog_path(path)),
            None => Self::from_lookup(lookup),
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }
}
