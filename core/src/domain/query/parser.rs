//! Parsers for the `filter` and `orderBy` query parameters.
//!
//! Filter expressions are a flat list of `name=value` clauses separated by
//! the `OR` keyword, e.g. `name=acme OR description=widget company`.
//! OrderBy expressions are comma separated `name [asc|desc]` clauses, e.g.
//! `name asc, createTime desc`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    common::entities::app_errors::ValidationError,
    query::entities::{FilterClause, OrderClause},
};

const OR_KEYWORD: &str = "OR";

static EQUALS_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*=[ \t]*").expect("equals padding pattern is valid"));

/// Parses a filter expression into its clauses, in input order.
///
/// An empty expression yields no clauses. Words following a `name=value`
/// token up to the next `OR` belong to the value and are joined with a
/// single space.
pub fn parse_filter(expr: &str) -> Result<Vec<FilterClause>, ValidationError> {
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }

    let normalized = EQUALS_PADDING.replace_all(expr, "=");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let mut clauses = Vec::new();
    let mut current: Option<FilterClause> = None;
    let mut after_or = false;

    for (index, token) in tokens.iter().enumerate() {
        if *token == OR_KEYWORD {
            if index == 0 {
                return Err(ValidationError::filter_syntax(
                    expr,
                    "OR must be preceded by a clause",
                ));
            }
            if after_or {
                return Err(ValidationError::filter_syntax(
                    expr,
                    "OR cannot follow another OR",
                ));
            }
            if index == tokens.len() - 1 {
                return Err(ValidationError::filter_syntax(
                    expr,
                    "OR must be followed by a clause",
                ));
            }
            clauses.extend(current.take());
            after_or = true;
            continue;
        }
        after_or = false;

        if token.contains('=') {
            let clause = parse_filter_clause(expr, token)?;
            clauses.extend(current.replace(clause));
        } else {
            match current.as_mut() {
                Some(clause) => {
                    clause.value.push(' ');
                    clause.value.push_str(token);
                }
                None => {
                    return Err(ValidationError::filter_syntax(
                        expr,
                        format!("value '{token}' is not part of a name=value clause"),
                    ));
                }
            }
        }
    }

    clauses.extend(current);
    Ok(clauses)
}

/// `OR` is reserved on both sides of `=`, so padding removal cannot turn a
/// dangling `=` into a clause named or valued `OR`.
fn parse_filter_clause(expr: &str, token: &str) -> Result<FilterClause, ValidationError> {
    match token.split('=').collect::<Vec<_>>().as_slice() {
        [name, value] if *name == OR_KEYWORD || *value == OR_KEYWORD => {
            Err(ValidationError::filter_syntax(
                expr,
                format!("'{token}' uses the reserved word {OR_KEYWORD} as a name or value"),
            ))
        }
        [name, value] if !name.is_empty() && !value.is_empty() => {
            Ok(FilterClause::new(*name, *value))
        }
        _ => Err(ValidationError::filter_syntax(
            expr,
            format!("'{token}' is not of the form name=value"),
        )),
    }
}

/// Parses an orderBy expression into its clauses, in input order.
///
/// A clause without a direction sorts ascending.
pub fn parse_order_by(expr: &str) -> Result<Vec<OrderClause>, ValidationError> {
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }

    expr.split(',')
        .map(|clause| parse_order_clause(expr, clause))
        .collect()
}

fn parse_order_clause(expr: &str, clause: &str) -> Result<OrderClause, ValidationError> {
    match clause.split_whitespace().collect::<Vec<_>>().as_slice() {
        [name] => Ok(OrderClause::asc(*name)),
        [name, "asc"] => Ok(OrderClause::asc(*name)),
        [name, "desc"] => Ok(OrderClause::desc(*name)),
        [] => Err(ValidationError::order_by_syntax(expr, "empty clause")),
        [_, direction] => Err(ValidationError::order_by_syntax(
            expr,
            format!("invalid direction '{direction}', expected 'asc' or 'desc'"),
        )),
        _ => Err(ValidationError::order_by_syntax(
            expr,
            format!("too many tokens in '{}'", clause.trim()),
        )),
    }
}
