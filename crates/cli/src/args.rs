use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Enable, disable, or query catalog products by SKU.
#[derive(Debug, Parser)]
#[command(name = "skustatus", version)]
pub struct Cli {
    /// Catalog file (overrides SKUSTATUS_CATALOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Enable a product by SKU
    #[command(name = "catalog:product:enable", visible_alias = "enable")]
    Enable {
        /// SKU to enable
        sku: String,
    },

    /// Disable a product by SKU
    #[command(name = "catalog:product:disable", visible_alias = "disable")]
    Disable {
        /// SKU to disable
        sku: String,
    },

    /// Show status for products matching SKU
    #[command(name = "catalog:product:status", visible_alias = "status")]
    Status {
        /// SKU to display the product status of
        sku: String,
    },

    /// Print the status of exactly one product
    #[command(name = "catalog:product:get", visible_alias = "get")]
    Get {
        /// Exact SKU
        sku: String,
    },

    /// Set a product's status; succeeds if it already has that status
    #[command(name = "catalog:product:set", visible_alias = "set")]
    Set {
        /// Exact SKU
        sku: String,
        /// "enabled" or "disabled"
        status: String,
    },
}
