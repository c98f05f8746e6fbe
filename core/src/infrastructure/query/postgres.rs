use sea_orm::{
    Condition, Order, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};

use crate::domain::query::{
    compiler::{CompiledFilter, MatchPattern},
    entities::{Combinator, PageRange},
    ports::{OrderBackend, PredicateBackend},
};

/// Translates compiled queries into sea-orm conditions for Postgres.
///
/// Matching is `LOWER(column) LIKE pattern ESCAPE '\'` with the pattern
/// lower-cased on our side.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresQueryBackend;

impl PredicateBackend for PostgresQueryBackend {
    type Condition = Condition;

    fn matches(&self, column: &str, pattern: &MatchPattern) -> Condition {
        let lowered = Func::lower(Expr::col(Alias::new(column)));
        let like = LikeExpr::new(pattern.to_like_pattern()).escape('\\');
        Condition::all().add(Expr::expr(lowered).like(like))
    }

    fn combine(&self, conditions: Vec<Condition>, combinator: Combinator) -> Condition {
        let root = match combinator {
            Combinator::Any => Condition::any(),
            Combinator::All => Condition::all(),
        };
        conditions
            .into_iter()
            .fold(root, |root, condition| root.add(condition))
    }
}

impl<Q: QueryOrder> OrderBackend<Q> for PostgresQueryBackend {
    fn order_by(&self, query: Q, column: &str, descending: bool) -> Q {
        let order = if descending { Order::Desc } else { Order::Asc };
        query.order_by(SimpleExpr::from(Expr::col(Alias::new(column))), order)
    }
}

impl PostgresQueryBackend {
    pub fn apply_filter<Q: QueryFilter>(&self, query: Q, filter: &CompiledFilter) -> Q {
        match filter.apply(self) {
            Some(condition) => query.filter(condition),
            None => query,
        }
    }

    /// Applies a non-empty range as `OFFSET`/`LIMIT`.
    ///
    /// An empty range leaves the query untouched; callers skip the fetch.
    pub fn apply_range<Q: QuerySelect>(&self, query: Q, range: PageRange) -> Q {
        if range.is_empty() {
            return query;
        }
        query
            .offset(u64::try_from(range.start).unwrap_or_default())
            .limit(range.len() as u64)
    }
}
