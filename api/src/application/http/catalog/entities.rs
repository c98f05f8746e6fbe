use std::{borrow::Cow, path::Path};

use anyhow::Context;
use ferrisquery_core::domain::query::{ports::Record, value_objects::ColumnAllowList};
use serde_json::{Map, Value};

/// A catalog entry: a flat JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem(pub Map<String, Value>);

impl Record for CatalogItem {
    /// Strings are read as-is, other scalars by their JSON text; `null` is absent.
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        match self.0.get(column)? {
            Value::Null => None,
            Value::String(value) => Some(Cow::Borrowed(value.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl From<CatalogItem> for Value {
    fn from(item: CatalogItem) -> Self {
        Value::Object(item.0)
    }
}

/// The queryable items served by the API and the attributes clients may use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub allow_list: ColumnAllowList,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>, allow_list: ColumnAllowList) -> Self {
        Self { items, allow_list }
    }

    pub fn load(path: &Path, allow_list: ColumnAllowList) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let items: Vec<Map<String, Value>> = serde_json::from_str(&raw)
            .with_context(|| format!("catalog {} is not a JSON array of objects", path.display()))?;

        Ok(Self::new(
            items.into_iter().map(CatalogItem).collect(),
            allow_list,
        ))
    }
}
