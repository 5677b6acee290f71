//! Status management facade.

use skustatus_core::SkuInput;

use crate::adapter::ProductStatusAdapter;
use crate::error::{ProductStatusError, StatusResult};
use crate::status::ProductStatus;

/// `get`/`set` over a [`ProductStatusAdapter`].
///
/// Unlike the adapter, `set` is idempotent: asking for the status a product
/// already has succeeds silently.
#[derive(Debug, Clone)]
pub struct ProductStatusManagement<A> {
    adapter: A,
}

impl<A> ProductStatusManagement<A>
where
    A: ProductStatusAdapter,
{
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn get(&self, sku: &SkuInput) -> StatusResult<ProductStatus> {
        self.adapter.get_status_by_sku(sku)
    }

    /// Apply `status` (`"enabled"` or `"disabled"`) and echo it back.
    ///
    /// The product is not re-read; the return value is the requested status.
    pub fn set(&self, sku: &SkuInput, status: &str) -> StatusResult<ProductStatus> {
        let requested: ProductStatus = status
            .parse()
            .map_err(|_| ProductStatusError::invalid_status_argument())?;

        let outcome = match requested {
            ProductStatus::Enabled => self.adapter.enable_product_by_sku(sku),
            ProductStatus::Disabled => self.adapter.disable_product_by_sku(sku),
        };

        match outcome {
            Ok(()) => Ok(requested),
            Err(err) if err.is_noop_transition() => {
                tracing::debug!(status = %requested, "product already in requested status");
                Ok(requested)
            }
            Err(err) => Err(err),
        }
    }
}
