//! SKU validation errors.

use thiserror::Error;

/// A SKU failed validation.
///
/// Raised before any storage access. The messages are part of the contract:
/// front ends print them verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSku {
    #[error("Sku cannot be null")]
    Null,

    #[error("Sku cannot be empty")]
    Empty,

    #[error("Sku must be a string")]
    NotAString,
}
