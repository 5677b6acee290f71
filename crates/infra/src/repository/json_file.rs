use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use skustatus_catalog::{CatalogError, Product, ProductRepository, SearchCriteria, SearchResults};

use super::in_memory::InMemoryProductRepository;

/// On-disk catalog document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Product repository backed by a JSON catalog file.
///
/// The whole catalog is loaded on open and rewritten on every save (temp file
/// + rename). A missing file is an empty catalog.
#[derive(Debug)]
pub struct JsonFileProductRepository {
    path: PathBuf,
    products: InMemoryProductRepository,
    write_lock: Mutex<()>,
}

impl JsonFileProductRepository {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let file = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            serde_json::from_str::<CatalogFile>(&raw).map_err(|e| {
                CatalogError::Serialization(format!("{}: {e}", path.display()))
            })?
        } else {
            tracing::debug!(path = %path.display(), "catalog file not found; starting empty");
            CatalogFile::default()
        };

        let products = InMemoryProductRepository::new();
        for product in file.products {
            if products.get(product.sku()).is_ok() {
                tracing::warn!(sku = %product.sku(), "duplicate sku in catalog file; last entry wins");
            }
            products.insert(product)?;
        }

        Ok(Self {
            path,
            products,
            write_lock: Mutex::new(()),
        })
    }

    /// Write `products` as the whole catalog. The file is replaced only if
    /// the temp file was fully written; a failed write leaves no temp file.
    fn persist(&self, products: Vec<Product>) -> Result<(), CatalogError> {
        let file = CatalogFile { products };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| CatalogError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        if let Err(e) = fs::write(&tmp, json) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), "catalog file written");
        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> CatalogError {
    CatalogError::storage(format!("{}: {err}", path.display()))
}

impl ProductRepository for JsonFileProductRepository {
    fn get(&self, sku: &str) -> Result<Product, CatalogError> {
        self.products.get(sku)
    }

    fn save(&self, product: &Product) -> Result<Product, CatalogError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CatalogError::storage("catalog write lock poisoned"))?;

        let mut stored = product.clone();
        stored.touch(Utc::now());

        // The file is written first so a failed write leaves memory untouched.
        let mut products: Vec<Product> = self
            .products
            .snapshot()?
            .into_iter()
            .filter(|p| p.sku() != stored.sku())
            .collect();
        products.push(stored.clone());
        products.sort_by(|a, b| a.sku().cmp(b.sku()));
        self.persist(products)?;

        self.products.insert(stored.clone())?;
        Ok(stored)
    }

    fn get_list(&self, criteria: &SearchCriteria) -> Result<SearchResults, CatalogError> {
        self.products.get_list(criteria)
    }
}
