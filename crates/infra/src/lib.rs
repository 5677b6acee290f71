//! Infrastructure layer: product storage collaborators and configuration.

pub mod config;
pub mod repository;


pub use config::{CatalogConfig, ConfigError};
pub use repository::{InMemoryProductRepository, JsonFileProductRepository};
