use std::fmt;

use thiserror::Error;

/// The operation a column name is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Filter,
    OrderBy,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Filter => f.write_str("filter"),
            Operation::OrderBy => f.write_str("orderBy"),
        }
    }
}

/// Client input error raised while parsing or compiling a query expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid filter syntax in '{input}': {reason}")]
    FilterSyntax { input: String, reason: String },

    #[error("invalid orderBy syntax in '{input}': {reason}")]
    OrderBySyntax { input: String, reason: String },

    #[error("unknown {operation} attribute: {name}")]
    UnknownAttribute { operation: Operation, name: String },

    #[error("attribute {name} cannot be used for {operation}")]
    DisallowedAttribute { operation: Operation, name: String },

    #[error("invalid match pattern '{value}': {reason}")]
    InvalidPattern { value: String, reason: String },
}

impl ValidationError {
    pub fn filter_syntax(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FilterSyntax {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn order_by_syntax(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OrderBySyntax {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
