//! Query-parameter construction for list endpoints
//!
//! A [`QueryParams`] value holds the filter conditions, sort order,
//! included relations and paging knobs for one list request, and renders
//! them using the query-string conventions of the Flock API
//! (`where[field]=value`, `order=`, `include=a,b`, `per_page=`,
//! `offset=`). The value is request-scoped; nothing here touches I/O.

/// Error type for query construction
#[derive(Debug)]
pub enum QueryError {
    InvalidWhere(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidWhere(expr) => {
                write!(f, "Invalid filter condition: {} (expected field=value)", expr)
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Query parameters for one list request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub wheres: Vec<(String, String)>,
    pub order: Option<String>,
    pub includes: Vec<String>,
    pub per_page: Option<usize>,
    pub offset: Option<usize>,
}

impl QueryParams {
    /// Render the parameters as query key-value pairs.
    ///
    /// Output order is deterministic: where conditions in insertion order,
    /// then order, include, per_page, offset.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        for (field, value) in &self.wheres {
            query.push((format!("where[{}]", field), value.clone()));
        }

        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }

        if !self.includes.is_empty() {
            query.push(("include".to_string(), self.includes.join(",")));
        }

        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }

        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }

        query
    }
}

/// Parse a `field=value` filter expression
///
/// Field names must be non-empty and contain only alphanumeric
/// characters, underscores, dots, and hyphens. The value may be empty.
pub fn parse_where(expr: &str) -> Result<(String, String), QueryError> {
    let (field, value) = expr
        .split_once('=')
        .ok_or_else(|| QueryError::InvalidWhere(expr.to_string()))?;

    let field = field.trim();
    if field.is_empty()
        || !field
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
    {
        return Err(QueryError::InvalidWhere(expr.to_string()));
    }

    Ok((field.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_full() {
        let params = QueryParams {
            wheres: vec![
                ("status".to_string(), "active".to_string()),
                ("last_name".to_string(), "Lovelace".to_string()),
            ],
            order: Some("-created_at".to_string()),
            includes: vec!["emails".to_string(), "addresses".to_string()],
            per_page: Some(50),
            offset: Some(100),
        };

        let query = params.to_query();

        assert_eq!(
            query,
            vec![
                ("where[status]".to_string(), "active".to_string()),
                ("where[last_name]".to_string(), "Lovelace".to_string()),
                ("order".to_string(), "-created_at".to_string()),
                ("include".to_string(), "emails,addresses".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("offset".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_query_empty() {
        let params = QueryParams::default();
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_to_query_omits_unset_knobs() {
        let params = QueryParams {
            per_page: Some(25),
            ..Default::default()
        };

        let query = params.to_query();

        assert_eq!(query, vec![("per_page".to_string(), "25".to_string())]);
    }

    #[test]
    fn test_parse_where_valid() {
        assert_eq!(
            parse_where("status=active").unwrap(),
            ("status".to_string(), "active".to_string())
        );
        assert_eq!(
            parse_where("last_name=Lovelace").unwrap(),
            ("last_name".to_string(), "Lovelace".to_string())
        );
    }

    #[test]
    fn test_parse_where_trims_whitespace() {
        assert_eq!(
            parse_where(" status = active ").unwrap(),
            ("status".to_string(), "active".to_string())
        );
    }

    #[test]
    fn test_parse_where_value_may_contain_equals() {
        assert_eq!(
            parse_where("search=a=b").unwrap(),
            ("search".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn test_parse_where_empty_value() {
        assert_eq!(
            parse_where("birthdate=").unwrap(),
            ("birthdate".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_where_invalid() {
        assert!(parse_where("no-equals-sign").is_err());
        assert!(parse_where("=value").is_err());
        assert!(parse_where("bad field=value").is_err());
        assert!(parse_where("bad@field=value").is_err());
    }
}
