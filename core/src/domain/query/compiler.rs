use regex::{Regex, RegexBuilder};

use crate::domain::{
    common::entities::app_errors::{Operation, ValidationError},
    query::{
        entities::{Combinator, FilterClause, OrderClause},
        ports::{OrderBackend, PredicateBackend},
        resolver::resolve_column,
        value_objects::ColumnAllowList,
    },
};

const WILDCARD: char = '*';

/// A case-insensitive glob pattern where `*` matches any sequence of characters.
///
/// Values without a wildcard match as substrings, i.e. `v` behaves like `*v*`.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    glob: String,
    regex: Regex,
}

impl MatchPattern {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let glob = if value.contains(WILDCARD) {
            value.to_string()
        } else {
            format!("{WILDCARD}{value}{WILDCARD}")
        };

        let source = glob
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = RegexBuilder::new(&format!("^{source}$"))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| ValidationError::InvalidPattern {
                value: value.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { glob, regex })
    }

    /// The anchored glob this pattern matches, with `*` as the only wildcard.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Lower-cased SQL `LIKE` pattern using `\` as the escape character.
    pub fn to_like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.glob.len() + 2);
        for c in self.glob.to_lowercase().chars() {
            match c {
                WILDCARD => pattern.push('%'),
                '%' | '_' | '\\' => {
                    pattern.push('\\');
                    pattern.push(c);
                }
                _ => pattern.push(c),
            }
        }
        pattern
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
    }
}

impl Eq for MatchPattern {}

/// A single match condition on a resolved column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    column: String,
    pattern: MatchPattern,
}

impl Predicate {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    pub fn apply<B: PredicateBackend>(&self, backend: &B) -> B::Condition {
        backend.matches(&self.column, &self.pattern)
    }
}

/// A sort directive on a resolved column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDirective {
    column: String,
    descending: bool,
}

impl OrderDirective {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn apply<Q, B: OrderBackend<Q>>(&self, backend: &B, query: Q) -> Q {
        backend.order_by(query, &self.column, self.descending)
    }
}

/// Compiled predicates together with the combinator joining them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledFilter {
    pub predicates: Vec<Predicate>,
    pub combinator: Combinator,
}

impl CompiledFilter {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Builds the backend condition, or `None` when there is nothing to filter on.
    pub fn apply<B: PredicateBackend>(&self, backend: &B) -> Option<B::Condition> {
        if self.predicates.is_empty() {
            return None;
        }
        let conditions = self
            .predicates
            .iter()
            .map(|predicate| predicate.apply(backend))
            .collect();
        Some(backend.combine(conditions, self.combinator))
    }
}

/// A fully compiled list request: filter plus sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledQuery {
    pub filter: CompiledFilter,
    pub order: Vec<OrderDirective>,
}

impl CompiledQuery {
    pub fn apply_order<Q, B: OrderBackend<Q>>(&self, backend: &B, query: Q) -> Q {
        self.order
            .iter()
            .fold(query, |query, directive| directive.apply(backend, query))
    }
}

/// Compiles filter clauses into predicates, in clause order.
///
/// Fails on the first clause whose name is not allow-listed.
pub fn compile_predicates(
    clauses: &[FilterClause],
    allow_list: &ColumnAllowList,
) -> Result<Vec<Predicate>, ValidationError> {
    clauses
        .iter()
        .map(|clause| {
            let column = resolve_column(&clause.name, allow_list, Operation::Filter)?;
            let pattern = MatchPattern::new(&clause.value)?;
            Ok(Predicate { column, pattern })
        })
        .collect()
}

/// Compiles order clauses into sort directives, in clause order.
pub fn compile_order(
    clauses: &[OrderClause],
    allow_list: &ColumnAllowList,
) -> Result<Vec<OrderDirective>, ValidationError> {
    clauses
        .iter()
        .map(|clause| {
            let column = resolve_column(&clause.name, allow_list, Operation::OrderBy)?;
            Ok(OrderDirective {
                column,
                descending: clause.descending,
            })
        })
        .collect()
}
