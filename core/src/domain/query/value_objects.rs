use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::{Operation, ValidationError};

/// Raw list parameters as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryInput {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub page_size: Option<i32>,
    #[serde(default)]
    pub offset: Option<i32>,
}

/// Maps client-facing attribute names to storage identifiers.
///
/// An empty identifier marks an attribute that is known to the resource but
/// may not be used for filtering or ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAllowList {
    columns: HashMap<String, String>,
}

impl ColumnAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.insert(name.into(), column.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn resolve(&self, name: &str, operation: Operation) -> Result<&str, ValidationError> {
        match self.get(name) {
            None => Err(ValidationError::UnknownAttribute {
                operation,
                name: name.to_string(),
            }),
            Some("") => Err(ValidationError::DisallowedAttribute {
                operation,
                name: name.to_string(),
            }),
            Some(column) => Ok(column),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ColumnAllowList
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, column)| (name.into(), column.into()))
                .collect(),
        }
    }
}

/// Parses configuration text like `name=name,createTime=create_time,secret=`.
///
/// A bare `name` is shorthand for `name=name`; `name=` marks it disallowed.
impl FromStr for ColumnAllowList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut columns = HashMap::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (name, column) = match entry.split_once('=') {
                Some((name, column)) => (name.trim(), column.trim()),
                None => (entry, entry),
            };
            if name.is_empty() {
                return Err(format!("missing attribute name in '{entry}'"));
            }
            if columns
                .insert(name.to_string(), column.to_string())
                .is_some()
            {
                return Err(format!("duplicate attribute '{name}'"));
            }
        }
        Ok(Self { columns })
    }
}
