//! Status adapter: domain status ⇄ catalog storage.

use std::sync::Arc;

use skustatus_catalog::search::escape_like;
use skustatus_catalog::{CatalogError, Condition, Product, ProductRepository, SearchCriteriaBuilder};
use skustatus_core::{InvalidSku, Sku, SkuInput};

use crate::error::{ProductStatusError, StatusResult};
use crate::matches::StatusMatchSet;
use crate::status::ProductStatus;

/// Enable/disable/query operations keyed by SKU.
///
/// Every operation validates the SKU before touching storage.
pub trait ProductStatusAdapter {
    /// Status of every product whose SKU contains `sku`.
    fn get_product_status_matching_sku(&self, sku: &SkuInput) -> StatusResult<StatusMatchSet>;

    /// Fails with [`ProductStatusError::ProductAlreadyDisabled`] without saving
    /// when the product is already disabled.
    fn disable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()>;

    /// Fails with [`ProductStatusError::ProductAlreadyEnabled`] without saving
    /// when the product is already enabled.
    fn enable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()>;

    /// Status of the product with exactly this SKU.
    fn get_status_by_sku(&self, sku: &SkuInput) -> StatusResult<ProductStatus>;
}

impl<A> ProductStatusAdapter for Arc<A>
where
    A: ProductStatusAdapter + ?Sized,
{
    fn get_product_status_matching_sku(&self, sku: &SkuInput) -> StatusResult<StatusMatchSet> {
        (**self).get_product_status_matching_sku(sku)
    }

    fn disable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()> {
        (**self).disable_product_by_sku(sku)
    }

    fn enable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()> {
        (**self).enable_product_by_sku(sku)
    }

    fn get_status_by_sku(&self, sku: &SkuInput) -> StatusResult<ProductStatus> {
        (**self).get_status_by_sku(sku)
    }
}

/// [`ProductStatusAdapter`] backed by a [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct CatalogStatusAdapter<R> {
    repository: R,
}

impl<R> CatalogStatusAdapter<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Null, then empty, then type; see [`Sku::validate`].
    pub fn validate_sku(sku: &SkuInput) -> Result<Sku, InvalidSku> {
        Sku::validate(sku)
    }

    fn mapped_status(product: &Product) -> StatusResult<ProductStatus> {
        ProductStatus::from_code(product.status()).ok_or_else(|| {
            tracing::warn!(
                sku = %product.sku(),
                code = %product.status(),
                "product has unmapped status code"
            );
            ProductStatusError::UnmappedStatus {
                sku: product.sku().to_string(),
                code: product.status(),
            }
        })
    }

    fn transition(&self, sku: &SkuInput, target: ProductStatus) -> StatusResult<()> {
        let sku = Self::validate_sku(sku)?;
        tracing::debug!(sku = %sku, target = %target, "product status transition requested");

        let mut product = self
            .repository
            .get(sku.as_str())
            .map_err(wrap_not_found)?;

        if product.status() == target.code() {
            return Err(ProductStatusError::already_in(target, sku.as_str()));
        }

        product.set_status(target.code());
        self.repository.save(&product)?;

        tracing::info!(sku = %sku, status = %target, "product status changed");
        Ok(())
    }
}

/// Not-found during a mutation becomes an adapter error carrying the storage message.
fn wrap_not_found(err: CatalogError) -> ProductStatusError {
    if err.is_not_found() {
        ProductStatusError::ProductStatusAdapter(err.to_string())
    } else {
        ProductStatusError::Storage(err)
    }
}

impl<R> ProductStatusAdapter for CatalogStatusAdapter<R>
where
    R: ProductRepository,
{
    fn get_product_status_matching_sku(&self, sku: &SkuInput) -> StatusResult<StatusMatchSet> {
        let sku = Self::validate_sku(sku)?;

        let criteria = SearchCriteriaBuilder::new()
            .add_filter("sku", format!("%{}%", escape_like(sku.as_str())), Condition::Like)
            .create();
        let results = self.repository.get_list(&criteria)?;
        tracing::debug!(sku = %sku, matches = results.total_count(), "product status search");

        let mut matches = StatusMatchSet::new();
        for product in results.items() {
            matches.insert(product.sku(), Self::mapped_status(product)?);
        }
        Ok(matches)
    }

    fn disable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()> {
        self.transition(sku, ProductStatus::Disabled)
    }

    fn enable_product_by_sku(&self, sku: &SkuInput) -> StatusResult<()> {
        self.transition(sku, ProductStatus::Enabled)
    }

    fn get_status_by_sku(&self, sku: &SkuInput) -> StatusResult<ProductStatus> {
        let sku = Self::validate_sku(sku)?;
        let product = self.repository.get(sku.as_str())?;
        Self::mapped_status(&product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skustatus_catalog::{SearchCriteria, SearchResults, StatusCode};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String),
        Save(Product),
        GetList(SearchCriteria),
    }

    /// Repository fake that records every call.
    #[derive(Default)]
    struct SpyRepository {
        products: Mutex<Vec<Product>>,
        get_error: Option<CatalogError>,
        calls: Mutex<Vec<Call>>,
    }

    impl SpyRepository {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: Mutex::new(products),
                ..Self::default()
            }
        }

        fn failing_get(err: CatalogError) -> Self {
            Self {
                get_error: Some(err),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn saves(&self) -> Vec<Product> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::Save(p) => Some(p),
                    _ => None,
                })
                .collect()
        }
    }

    impl ProductRepository for SpyRepository {
        fn get(&self, sku: &str) -> Result<Product, CatalogError> {
            self.calls.lock().unwrap().push(Call::Get(sku.to_string()));
            if let Some(err) = &self.get_error {
                return Err(err.clone());
            }
            self.products
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.sku() == sku)
                .cloned()
                .ok_or_else(|| CatalogError::not_found(sku))
        }

        fn save(&self, product: &Product) -> Result<Product, CatalogError> {
            self.calls.lock().unwrap().push(Call::Save(product.clone()));
            let mut products = self.products.lock().unwrap();
            products.retain(|p| p.sku() != product.sku());
            products.push(product.clone());
            Ok(product.clone())
        }

        fn get_list(&self, criteria: &SearchCriteria) -> Result<SearchResults, CatalogError> {
            self.calls.lock().unwrap().push(Call::GetList(criteria.clone()));
            let items = self
                .products
                .lock()
                .unwrap()
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect();
            Ok(SearchResults::new(items))
        }
    }

    fn enabled(sku: &str) -> Product {
        Product::new(sku, format!("Product {sku}"), StatusCode::ENABLED)
    }

    fn disabled(sku: &str) -> Product {
        Product::new(sku, format!("Product {sku}"), StatusCode::DISABLED)
    }

    fn adapter(repo: SpyRepository) -> CatalogStatusAdapter<Arc<SpyRepository>> {
        CatalogStatusAdapter::new(Arc::new(repo))
    }

    fn invalid_inputs() -> Vec<(SkuInput, InvalidSku)> {
        vec![
            (SkuInput::null(), InvalidSku::Null),
            (SkuInput::from(""), InvalidSku::Empty),
            (SkuInput::from(json!({"not": "a sku"})), InvalidSku::NotAString),
        ]
    }

    #[test]
    fn invalid_skus_fail_before_any_storage_call() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("test")]));

        for (input, expected) in invalid_inputs() {
            let expected = ProductStatusError::InvalidSku(expected);
            assert_eq!(adapter.get_product_status_matching_sku(&input), Err(expected.clone()));
            assert_eq!(adapter.disable_product_by_sku(&input), Err(expected.clone()));
            assert_eq!(adapter.enable_product_by_sku(&input), Err(expected.clone()));
            assert_eq!(adapter.get_status_by_sku(&input), Err(expected));
        }

        assert!(adapter.repository().calls().is_empty());
    }

    #[test]
    fn invalid_sku_messages_are_preserved() {
        let adapter = adapter(SpyRepository::default());
        let msgs: Vec<String> = invalid_inputs()
            .into_iter()
            .map(|(input, _)| adapter.get_status_by_sku(&input).unwrap_err().to_string())
            .collect();
        assert_eq!(
            msgs,
            vec!["Sku cannot be null", "Sku cannot be empty", "Sku must be a string"]
        );
    }

    #[test]
    fn search_returns_empty_set_when_nothing_matches() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("other")]));
        let matches = adapter.get_product_status_matching_sku(&"x".into()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn search_maps_every_match() {
        let adapter = adapter(SpyRepository::with_products(vec![
            enabled("test1"),
            disabled("test2"),
            enabled("unrelated"),
        ]));

        let matches = adapter.get_product_status_matching_sku(&"test".into()).unwrap();

        let entries: Vec<_> = matches.iter().collect();
        assert_eq!(
            entries,
            vec![("test1", ProductStatus::Enabled), ("test2", ProductStatus::Disabled)]
        );
    }

    #[test]
    fn search_filters_sku_with_like_on_both_sides() {
        let adapter = adapter(SpyRepository::default());
        adapter.get_product_status_matching_sku(&"test".into()).unwrap();

        match adapter.repository().calls().as_slice() {
            [Call::GetList(criteria)] => {
                let filters = criteria.filters();
                assert_eq!(filters.len(), 1);
                assert_eq!(filters[0].field, "sku");
                assert_eq!(filters[0].value, "%test%");
                assert_eq!(filters[0].condition, Condition::Like);
            }
            other => panic!("Expected a single get_list call, got {other:?}"),
        }
    }

    #[test]
    fn search_treats_wildcards_in_the_query_literally() {
        let adapter = adapter(SpyRepository::with_products(vec![
            enabled("promo_50"),
            enabled("promoX50"),
        ]));
        let matches = adapter.get_product_status_matching_sku(&"o_5".into()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.get("promo_50"), Some(ProductStatus::Enabled));
    }

    #[test]
    fn search_fails_loudly_on_unmapped_status() {
        let adapter = adapter(SpyRepository::with_products(vec![Product::new(
            "test1",
            "Broken",
            StatusCode(9),
        )]));
        let err = adapter.get_product_status_matching_sku(&"test".into()).unwrap_err();
        assert_eq!(
            err,
            ProductStatusError::UnmappedStatus {
                sku: "test1".to_string(),
                code: StatusCode(9),
            }
        );
    }

    #[test]
    fn disable_saves_disabled_product() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("test")]));

        adapter.disable_product_by_sku(&"test".into()).unwrap();

        let saves = adapter.repository().saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].sku(), "test");
        assert_eq!(saves[0].status(), StatusCode::DISABLED);
    }

    #[test]
    fn disable_twice_fails_without_second_save() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("test")]));

        adapter.disable_product_by_sku(&"test".into()).unwrap();
        let err = adapter.disable_product_by_sku(&"test".into()).unwrap_err();

        assert_eq!(
            err,
            ProductStatusError::ProductAlreadyDisabled { sku: "test".to_string() }
        );
        assert_eq!(err.to_string(), "The product \"test\" is already disabled");
        assert_eq!(adapter.repository().saves().len(), 1);
    }

    #[test]
    fn enable_on_enabled_product_is_a_noop_error() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("test")]));

        let err = adapter.enable_product_by_sku(&"test".into()).unwrap_err();

        assert!(err.is_noop_transition());
        assert_eq!(err.to_string(), "The product \"test\" is already enabled");
        assert!(adapter.repository().saves().is_empty());
    }

    #[test]
    fn enable_then_disable_saves_once_per_call() {
        let adapter = adapter(SpyRepository::with_products(vec![disabled("fresh")]));

        adapter.enable_product_by_sku(&"fresh".into()).unwrap();
        adapter.disable_product_by_sku(&"fresh".into()).unwrap();

        let statuses: Vec<StatusCode> =
            adapter.repository().saves().iter().map(|p| p.status()).collect();
        assert_eq!(statuses, vec![StatusCode::ENABLED, StatusCode::DISABLED]);
    }

    #[test]
    fn disable_then_enable_on_enabled_product() {
        let adapter = adapter(SpyRepository::with_products(vec![enabled("fresh")]));

        adapter.disable_product_by_sku(&"fresh".into()).unwrap();
        adapter.enable_product_by_sku(&"fresh".into()).unwrap();

        let statuses: Vec<StatusCode> =
            adapter.repository().saves().iter().map(|p| p.status()).collect();
        assert_eq!(statuses, vec![StatusCode::DISABLED, StatusCode::ENABLED]);
    }

    #[test]
    fn mutations_wrap_not_found_with_original_message() {
        let not_found = CatalogError::not_found("test");
        let expected = ProductStatusError::ProductStatusAdapter(not_found.to_string());

        let adapter = adapter(SpyRepository::failing_get(not_found));

        assert_eq!(adapter.disable_product_by_sku(&"test".into()), Err(expected.clone()));
        assert_eq!(adapter.enable_product_by_sku(&"test".into()), Err(expected));
        assert!(adapter.repository().saves().is_empty());
    }

    #[test]
    fn mutations_pass_other_storage_errors_through() {
        let adapter = adapter(SpyRepository::failing_get(CatalogError::storage("timeout")));
        assert_eq!(
            adapter.disable_product_by_sku(&"test".into()),
            Err(ProductStatusError::Storage(CatalogError::storage("timeout")))
        );
    }

    #[test]
    fn get_status_returns_mapped_status() {
        let adapter = adapter(SpyRepository::with_products(vec![
            enabled("test1"),
            disabled("test2"),
        ]));
        assert_eq!(adapter.get_status_by_sku(&"test1".into()), Ok(ProductStatus::Enabled));
        assert_eq!(adapter.get_status_by_sku(&"test2".into()), Ok(ProductStatus::Disabled));
    }

    #[test]
    fn get_status_fails_on_unmapped_status() {
        let adapter = adapter(SpyRepository::with_products(vec![Product::new(
            "test1",
            "Broken",
            StatusCode(9),
        )]));
        assert_eq!(
            adapter.get_status_by_sku(&"test1".into()),
            Err(ProductStatusError::UnmappedStatus {
                sku: "test1".to_string(),
                code: StatusCode(9),
            })
        );
        assert!(adapter.repository().saves().is_empty());
    }

    #[test]
    fn get_status_propagates_not_found_unwrapped() {
        let adapter = adapter(SpyRepository::default());
        assert_eq!(
            adapter.get_status_by_sku(&"missing".into()),
            Err(ProductStatusError::Storage(CatalogError::not_found("missing")))
        );
    }

    #[test]
    fn mutation_repairs_unmapped_status() {
        let adapter = adapter(SpyRepository::with_products(vec![Product::new(
            "test",
            "Broken",
            StatusCode(0),
        )]));
        adapter.enable_product_by_sku(&"test".into()).unwrap();
        assert_eq!(adapter.get_status_by_sku(&"test".into()), Ok(ProductStatus::Enabled));
    }
}
