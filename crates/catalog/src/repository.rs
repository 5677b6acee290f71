use std::sync::Arc;

use crate::error::CatalogError;
use crate::product::Product;
use crate::search::{SearchCriteria, SearchResults};

/// Product storage repository.
///
/// The status service's only view of persistence. Implementations must:
/// - return [`CatalogError::NotFound`] from `get` when the SKU is unknown
/// - persist the full product on `save` and return the stored copy
/// - return `get_list` items in a stable order
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by its exact SKU.
    fn get(&self, sku: &str) -> Result<Product, CatalogError>;

    /// Persist a product.
    fn save(&self, product: &Product) -> Result<Product, CatalogError>;

    /// List products matching every filter in `criteria`.
    fn get_list(&self, criteria: &SearchCriteria) -> Result<SearchResults, CatalogError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn get(&self, sku: &str) -> Result<Product, CatalogError> {
        (**self).get(sku)
    }

    fn save(&self, product: &Product) -> Result<Product, CatalogError> {
        (**self).save(product)
    }

    fn get_list(&self, criteria: &SearchCriteria) -> Result<SearchResults, CatalogError> {
        (**self).get_list(criteria)
    }
}
