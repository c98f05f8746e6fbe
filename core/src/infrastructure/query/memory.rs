use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use crate::domain::query::{
    compiler::{CompiledQuery, MatchPattern},
    entities::{Combinator, PageRange},
    ports::{OrderBackend, PredicateBackend, Record},
};

/// Condition tree evaluated directly against [`Record`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryCondition {
    Match {
        column: String,
        pattern: MatchPattern,
    },
    Any(Vec<MemoryCondition>),
    All(Vec<MemoryCondition>),
}

impl MemoryCondition {
    /// A record without the column never matches.
    pub fn evaluate<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            MemoryCondition::Match { column, pattern } => record
                .field(column)
                .is_some_and(|value| pattern.matches(&value)),
            MemoryCondition::Any(conditions) => conditions.iter().any(|c| c.evaluate(record)),
            MemoryCondition::All(conditions) => conditions.iter().all(|c| c.evaluate(record)),
        }
    }
}

/// Sort keys accumulated from order directives, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortPlan {
    keys: Vec<(String, bool)>,
}

impl SortPlan {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Stable sort; records missing a column order before those that have it.
    pub fn sort<R: Record>(&self, records: &mut [R]) {
        if self.keys.is_empty() {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        for (column, descending) in &self.keys {
            let ordering = a.field(column).cmp(&b.field(column));
            let ordering = if *descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryBackend;

impl PredicateBackend for InMemoryBackend {
    type Condition = MemoryCondition;

    fn matches(&self, column: &str, pattern: &MatchPattern) -> MemoryCondition {
        MemoryCondition::Match {
            column: column.to_string(),
            pattern: pattern.clone(),
        }
    }

    fn combine(
        &self,
        conditions: Vec<MemoryCondition>,
        combinator: Combinator,
    ) -> MemoryCondition {
        match combinator {
            Combinator::Any => MemoryCondition::Any(conditions),
            Combinator::All => MemoryCondition::All(conditions),
        }
    }
}

impl OrderBackend<SortPlan> for InMemoryBackend {
    fn order_by(&self, mut plan: SortPlan, column: &str, descending: bool) -> SortPlan {
        plan.keys.push((column.to_string(), descending));
        plan
    }
}

/// The records of one page together with the size of the filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub total: i64,
    pub range: PageRange,
}

impl InMemoryBackend {
    /// Filters, sorts and slices `records` the way a database query would.
    ///
    /// `page_range` receives the filtered count and returns the slice to keep.
    pub fn execute<R, F>(&self, query: &CompiledQuery, records: &[R], page_range: F) -> Page<R>
    where
        R: Record + Clone,
        F: FnOnce(i64) -> PageRange,
    {
        let condition = query.filter.apply(self);
        let mut matched: Vec<R> = records
            .iter()
            .filter(|record| condition.as_ref().is_none_or(|c| c.evaluate(*record)))
            .cloned()
            .collect();

        query
            .apply_order(self, SortPlan::default())
            .sort(&mut matched);

        let total = matched.len() as i64;
        let range = page_range(total);
        Page {
            items: range.slice(&matched).to_vec(),
            total,
            range,
        }
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        self.get(column).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        self.get(column).map(|value| Cow::Borrowed(value.as_str()))
    }
}
