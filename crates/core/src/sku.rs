//! SKU input and validated SKU value object.
//!
//! Front ends hand over whatever they received (a CLI argument, a JSON request
//! field, nothing at all), so the raw input keeps the shape of a JSON value.
//! [`Sku::validate`] is the single gate between that and the typed domain.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::InvalidSku;
use crate::value_object::ValueObject;

/// Unvalidated SKU as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkuInput(JsonValue);

impl SkuInput {
    /// An absent SKU.
    pub fn null() -> Self {
        Self(JsonValue::Null)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }
}

impl From<&str> for SkuInput {
    fn from(value: &str) -> Self {
        Self(JsonValue::String(value.to_string()))
    }
}

impl From<String> for SkuInput {
    fn from(value: String) -> Self {
        Self(JsonValue::String(value))
    }
}

impl From<Option<&str>> for SkuInput {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<JsonValue> for SkuInput {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

impl From<&Sku> for SkuInput {
    fn from(value: &Sku) -> Self {
        Self::from(value.as_str())
    }
}

/// A validated, non-empty SKU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Sku(String);

impl ValueObject for Sku {}

impl Sku {
    /// Validate a raw SKU.
    ///
    /// Check order is fixed (null, then empty, then type) because each check
    /// selects a different message.
    pub fn validate(input: &SkuInput) -> Result<Self, InvalidSku> {
        let value = input.as_value();
        if value.is_null() {
            return Err(InvalidSku::Null);
        }
        if is_empty(value) {
            return Err(InvalidSku::Empty);
        }
        match value {
            JsonValue::String(s) => Ok(Self(s.clone())),
            _ => Err(InvalidSku::NotAString),
        }
    }

    /// Validate an already-typed string.
    pub fn new(sku: impl Into<String>) -> Result<Self, InvalidSku> {
        let sku = sku.into();
        if sku.is_empty() {
            return Err(InvalidSku::Empty);
        }
        Ok(Self(sku))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Emptiness of a raw value: empty string/array/object, `false`, or zero.
fn is_empty(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Sku {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Sku {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
