use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use skustatus_catalog::{CatalogError, Product, ProductRepository, SearchCriteria, SearchResults};

/// In-memory product repository for tests/dev.
///
/// Products are keyed by SKU; listings come back in SKU order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.sku().to_string(), p))
            .collect();
        Self {
            products: RwLock::new(map),
        }
    }

    /// Insert or replace a product without stamping `updated_at`.
    pub fn insert(&self, product: Product) -> Result<(), CatalogError> {
        let mut map = self.products.write().map_err(poisoned)?;
        map.insert(product.sku().to_string(), product);
        Ok(())
    }

    /// Copy of every stored product, in SKU order.
    pub fn snapshot(&self) -> Result<Vec<Product>, CatalogError> {
        let map = self.products.read().map_err(poisoned)?;
        Ok(map.values().cloned().collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CatalogError {
    CatalogError::storage("product map lock poisoned")
}

impl ProductRepository for InMemoryProductRepository {
    fn get(&self, sku: &str) -> Result<Product, CatalogError> {
        let map = self.products.read().map_err(poisoned)?;
        map.get(sku)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(sku))
    }

    fn save(&self, product: &Product) -> Result<Product, CatalogError> {
        let mut stored = product.clone();
        stored.touch(Utc::now());

        let mut map = self.products.write().map_err(poisoned)?;
        map.insert(stored.sku().to_string(), stored.clone());
        Ok(stored)
    }

    fn get_list(&self, criteria: &SearchCriteria) -> Result<SearchResults, CatalogError> {
        let map = self.products.read().map_err(poisoned)?;
        let items = map
            .values()
            .filter(|p| criteria.matches(p))
            .cloned()
            .collect();
        Ok(SearchResults::new(items))
    }
}
