//! Stored product record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skustatus_core::{Entity, ProductId};

/// Storage-native product status code.
///
/// The storage engine speaks numeric codes; only [`StatusCode::ENABLED`] and
/// [`StatusCode::DISABLED`] are meaningful, but any code can be read back from
/// a damaged catalog, so the type does not restrict the value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub u8);

impl StatusCode {
    pub const ENABLED: StatusCode = StatusCode(1);
    pub const DISABLED: StatusCode = StatusCode(2);

    pub fn code(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog product as held by the storage engine.
///
/// Mutations here are in-memory only; nothing is persisted until the product
/// is handed to [`ProductRepository::save`](crate::ProductRepository::save).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Records read without an id get a fresh one; it only becomes stable
    /// once the catalog holding the record is written back.
    #[serde(default)]
    id: ProductId,
    sku: String,
    #[serde(default)]
    name: String,
    status: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, status: StatusCode) -> Self {
        Self {
            id: ProductId::new(),
            sku: sku.into(),
            name: name.into(),
            status,
            updated_at: None,
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record the time of a save. Called by repositories.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
