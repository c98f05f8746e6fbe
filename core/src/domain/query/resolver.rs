use crate::domain::{
    common::entities::app_errors::{Operation, ValidationError},
    query::value_objects::ColumnAllowList,
};

/// Resolves a client-facing attribute name to its storage identifier.
///
/// Unknown names and names mapped to an empty identifier are both rejected,
/// so only allow-listed identifiers ever reach a query backend.
pub fn resolve_column(
    name: &str,
    allow_list: &ColumnAllowList,
    operation: Operation,
) -> Result<String, ValidationError> {
    allow_list.resolve(name, operation).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> ColumnAllowList {
        ColumnAllowList::new()
            .with("name", "name")
            .with("createTime", "create_time")
            .with("password", "")
    }

    #[test]
    fn test_resolve_known_column() {
        let column = resolve_column("createTime", &allow_list(), Operation::OrderBy).unwrap();
        assert_eq!(column, "create_time");
    }

    #[test]
    fn test_resolve_unknown_column() {
        let err = resolve_column("owner", &allow_list(), Operation::Filter).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownAttribute {
                operation: Operation::Filter,
                name: "owner".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unknown filter attribute: owner");
    }

    #[test]
    fn test_resolve_disallowed_column() {
        let err = resolve_column("password", &allow_list(), Operation::OrderBy).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DisallowedAttribute {
                operation: Operation::OrderBy,
                name: "password".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "attribute password cannot be used for orderBy"
        );
    }
}
