use std::borrow::Cow;

use crate::domain::query::{compiler::MatchPattern, entities::Combinator};

/// A query backend able to express compiled filter predicates.
///
/// Implementations translate a case-insensitive match of a pattern against a
/// resolved column into their own condition type, and join conditions with
/// the requested combinator.
#[cfg_attr(test, mockall::automock(type Condition = String;))]
pub trait PredicateBackend {
    type Condition;

    fn matches(&self, column: &str, pattern: &MatchPattern) -> Self::Condition;

    fn combine(&self, conditions: Vec<Self::Condition>, combinator: Combinator)
    -> Self::Condition;
}

/// A query backend able to apply sort directives to a query of type `Q`.
pub trait OrderBackend<Q> {
    fn order_by(&self, query: Q, column: &str, descending: bool) -> Q;
}

/// A record whose columns can be read as text by the in-memory backend.
pub trait Record {
    fn field(&self, column: &str) -> Option<Cow<'_, str>>;
}
