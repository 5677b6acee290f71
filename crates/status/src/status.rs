//! Domain status and its mapping to storage status codes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skustatus_catalog::StatusCode;

/// Two-valued product status exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    Disabled,
}

impl ProductStatus {
    pub const ENABLED: &'static str = "enabled";
    pub const DISABLED: &'static str = "disabled";

    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Enabled => Self::ENABLED,
            ProductStatus::Disabled => Self::DISABLED,
        }
    }

    /// Map a storage code to a status; `None` for any code outside the
    /// two-entry table.
    pub fn from_code(code: StatusCode) -> Option<Self> {
        match code {
            StatusCode::ENABLED => Some(ProductStatus::Enabled),
            StatusCode::DISABLED => Some(ProductStatus::Disabled),
            _ => None,
        }
    }

    pub fn code(self) -> StatusCode {
        match self {
            ProductStatus::Enabled => StatusCode::ENABLED,
            ProductStatus::Disabled => StatusCode::DISABLED,
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown product status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on `enabled` / `disabled`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ENABLED => Ok(ProductStatus::Enabled),
            Self::DISABLED => Ok(ProductStatus::Disabled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
