//! Product status service.
//!
//! Two layers over an injected [`ProductRepository`](skustatus_catalog::ProductRepository):
//!
//! - [`CatalogStatusAdapter`]: validates SKUs, maps storage status codes to
//!   [`ProductStatus`], and reports no-op transitions as errors.
//! - [`ProductStatusManagement`]: a narrower `get`/`set` facade where setting a
//!   product to the status it already has succeeds.

pub mod adapter;
pub mod error;
pub mod management;
pub mod matches;
pub mod status;

pub use adapter::{CatalogStatusAdapter, ProductStatusAdapter};
pub use error::{ProductStatusError, StatusResult};
pub use management::ProductStatusManagement;
pub use matches::StatusMatchSet;
pub use status::ProductStatus;
