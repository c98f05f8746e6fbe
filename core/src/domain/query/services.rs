use tracing::{Dispatch, debug, dispatcher, warn};

use crate::domain::{
    common::entities::app_errors::ValidationError,
    query::{
        compiler::{CompiledFilter, CompiledQuery, compile_order, compile_predicates},
        entities::{Combinator, FilterClause, OrderClause, PageRange},
        pagination::compute_range,
        parser::{parse_filter, parse_order_by},
        value_objects::{ColumnAllowList, ListQueryInput},
    },
};

/// Runs list requests through parsing and compilation.
///
/// Diagnostics go to the injected [`Dispatch`] rather than the global
/// subscriber, so callers decide where (and whether) they are recorded.
#[derive(Clone)]
pub struct QueryService {
    dispatch: Dispatch,
}

impl QueryService {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub fn silent() -> Self {
        Self::new(Dispatch::none())
    }

    fn traced<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    pub fn parse_filter(&self, expr: &str) -> Result<Vec<FilterClause>, ValidationError> {
        self.traced(|| {
            let result = parse_filter(expr);
            match &result {
                Ok(clauses) => debug!(filter = expr, clauses = clauses.len(), "parsed filter"),
                Err(e) => warn!(filter = expr, error = %e, "rejected filter"),
            }
            result
        })
    }

    pub fn parse_order_by(&self, expr: &str) -> Result<Vec<OrderClause>, ValidationError> {
        self.traced(|| {
            let result = parse_order_by(expr);
            match &result {
                Ok(clauses) => debug!(order_by = expr, clauses = clauses.len(), "parsed orderBy"),
                Err(e) => warn!(order_by = expr, error = %e, "rejected orderBy"),
            }
            result
        })
    }

    /// Parses and compiles the filter and orderBy of a list request.
    pub fn compile(
        &self,
        input: &ListQueryInput,
        allow_list: &ColumnAllowList,
        combinator: Combinator,
    ) -> Result<CompiledQuery, ValidationError> {
        let filter_clauses = self.parse_filter(input.filter.as_deref().unwrap_or_default())?;
        let order_clauses = self.parse_order_by(input.order_by.as_deref().unwrap_or_default())?;

        self.traced(|| -> Result<CompiledQuery, ValidationError> {
            let compiled = compile_predicates(&filter_clauses, allow_list)
                .and_then(|predicates| {
                    let order = compile_order(&order_clauses, allow_list)?;
                    Ok(CompiledQuery {
                        filter: CompiledFilter {
                            predicates,
                            combinator,
                        },
                        order,
                    })
                })
                .inspect_err(|e| warn!(error = %e, "rejected query attribute"))?;

            debug!(
                predicates = compiled.filter.predicates.len(),
                order = compiled.order.len(),
                ?combinator,
                "compiled list query"
            );
            Ok(compiled)
        })
    }

    pub fn page_range(&self, page_size: i32, offset: i32, total_count: i64) -> PageRange {
        self.traced(|| {
            let range = compute_range(page_size, offset, total_count);
            if range.is_empty() {
                debug!(page_size, offset, total_count, "nothing to paginate");
            }
            range
        })
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new(dispatcher::get_default(Dispatch::clone))
    }
}
