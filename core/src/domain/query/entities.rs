use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One `name=value` branch of a filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterClause {
    pub name: String,
    pub value: String,
}

impl FilterClause {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// One `name [asc|desc]` unit of an orderBy expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrderClause {
    pub name: String,
    pub descending: bool,
}

impl OrderClause {
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: true,
        }
    }
}

impl fmt::Display for OrderClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.descending { "desc" } else { "asc" };
        write!(f, "{} {}", self.name, direction)
    }
}

/// How compiled predicates are joined by the query backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Combinator {
    /// A record matches when any predicate matches (the `OR` of the grammar).
    #[default]
    Any,
    /// A record matches only when every predicate matches.
    All,
}

/// Inclusive `[start, end]` slice bounds of a result set.
///
/// `end == -1` means there is nothing to paginate. Ranges with a negative
/// `start` or with `end < start` are treated as empty too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageRange {
    /// Index of the first item.
    pub start: i64,
    /// Index of the last item.
    pub end: i64,
}

impl PageRange {
    pub const EMPTY: PageRange = PageRange { start: 0, end: -1 };

    pub fn is_empty(&self) -> bool {
        self.start < 0 || self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let len = self.end.saturating_sub(self.start).saturating_add(1);
        usize::try_from(len).unwrap_or(usize::MAX)
    }

    /// Returns the part of `items` covered by this range, clamped to its length.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.is_empty() {
            return &[];
        }
        let start = usize::try_from(self.start).unwrap_or(usize::MAX);
        let end = usize::try_from(self.end)
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        &items[start.min(items.len())..end.min(items.len())]
    }
}

/// Renders clauses back into a filter expression accepted by `parse_filter`.
pub fn format_filter(clauses: &[FilterClause]) -> String {
    clauses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Renders clauses back into an orderBy expression accepted by `parse_order_by`.
pub fn format_order_by(clauses: &[OrderClause]) -> String {
    clauses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
