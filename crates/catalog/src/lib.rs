//! Catalog storage port.
//!
//! Describes what the status service needs from the product storage engine:
//! the stored product record, its native status codes, search criteria, and the
//! repository trait. Implementations live in `skustatus-infra`.

pub mod error;
pub mod product;
pub mod repository;
pub mod search;

pub use error::CatalogError;
pub use product::{Product, StatusCode};
pub use repository::ProductRepository;
pub use search::{Condition, Filter, SearchCriteria, SearchCriteriaBuilder, SearchResults};
