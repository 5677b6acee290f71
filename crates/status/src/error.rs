//! Status service error taxonomy.

use thiserror::Error;

use skustatus_catalog::{CatalogError, StatusCode};
use skustatus_core::InvalidSku;

use crate::status::ProductStatus;

pub type StatusResult<T> = Result<T, ProductStatusError>;

/// Errors surfaced by the status adapter and the management facade.
///
/// None of these are retried; each is terminal for the call that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductStatusError {
    /// The SKU failed validation; storage was not touched.
    #[error(transparent)]
    InvalidSku(#[from] InvalidSku),

    /// Disable requested for a product that is already disabled.
    #[error("The product \"{sku}\" is already disabled")]
    ProductAlreadyDisabled { sku: String },

    /// Enable requested for a product that is already enabled.
    #[error("The product \"{sku}\" is already enabled")]
    ProductAlreadyEnabled { sku: String },

    /// The SKU was well-formed but did not resolve to a product at mutation time.
    #[error("{0}")]
    ProductStatusAdapter(String),

    /// Storage returned a status code outside the enabled/disabled table.
    #[error("product \"{sku}\" has unmapped status code {code}")]
    UnmappedStatus { sku: String, code: StatusCode },

    /// `set` was called with a status that is neither `enabled` nor `disabled`.
    #[error("{0}")]
    InvalidArgument(String),

    /// Any other storage failure, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] CatalogError),
}

impl ProductStatusError {
    pub(crate) fn already_in(status: ProductStatus, sku: &str) -> Self {
        let sku = sku.to_string();
        match status {
            ProductStatus::Enabled => Self::ProductAlreadyEnabled { sku },
            ProductStatus::Disabled => Self::ProductAlreadyDisabled { sku },
        }
    }

    pub(crate) fn invalid_status_argument() -> Self {
        Self::InvalidArgument(format!(
            "The product status you entered is not valid - it must match \"{}\" or \"{}\"",
            ProductStatus::ENABLED,
            ProductStatus::DISABLED,
        ))
    }

    /// `true` when the requested transition targeted the current status.
    pub fn is_noop_transition(&self) -> bool {
        matches!(
            self,
            Self::ProductAlreadyDisabled { .. } | Self::ProductAlreadyEnabled { .. }
        )
    }
}
