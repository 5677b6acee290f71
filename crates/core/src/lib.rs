//! `skustatus-core`: domain primitives shared by the catalog and status crates.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod sku;
pub mod value_object;

pub use entity::Entity;
pub use error::InvalidSku;
pub use id::ProductId;
pub use sku::{Sku, SkuInput};
pub use value_object::ValueObject;
