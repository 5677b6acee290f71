use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::status::ProductStatus;

/// SKU → status pairs in storage result order.
///
/// Inserting a SKU that is already present replaces its status in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMatchSet {
    entries: Vec<(String, ProductStatus)>,
}

impl StatusMatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sku: impl Into<String>, status: ProductStatus) {
        let sku = sku.into();
        match self.entries.iter_mut().find(|(s, _)| *s == sku) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((sku, status)),
        }
    }

    pub fn get(&self, sku: &str) -> Option<ProductStatus> {
        self.entries
            .iter()
            .find(|(s, _)| s == sku)
            .map(|(_, status)| *status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ProductStatus)> {
        self.entries.iter().map(|(s, status)| (s.as_str(), *status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ProductStatus)> for StatusMatchSet {
    fn from_iter<I: IntoIterator<Item = (String, ProductStatus)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (sku, status) in iter {
            set.insert(sku, status);
        }
        set
    }
}

impl Serialize for StatusMatchSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (sku, status) in &self.entries {
            map.serialize_entry(sku, status)?;
        }
        map.end()
    }
}
