use thiserror::Error;

/// Storage-layer error.
///
/// These are **infrastructure errors** raised by repository implementations,
/// as opposed to the status service's own domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product exists for the requested SKU.
    #[error("The product that was requested doesn't exist. Verify the product and try again.")]
    NotFound { sku: String },

    /// The backing store failed (IO, poisoned lock, ...).
    #[error("catalog storage failure: {0}")]
    Storage(String),

    /// Stored data could not be encoded or decoded.
    #[error("catalog serialization failure: {0}")]
    Serialization(String),
}

impl CatalogError {
    pub fn not_found(sku: impl Into<String>) -> Self {
        Self::NotFound { sku: sku.into() }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
