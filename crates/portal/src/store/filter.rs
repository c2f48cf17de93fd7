//! Filter combinators for table queries.
//!
//! The hosted API exposes equality on a column and logical OR across
//! columns, plus ordering by a timestamp column. [`Filter`] models exactly
//! that and nothing more; it both renders to the wire query-string form and
//! evaluates against in-memory rows.

use serde_json::Value;

/// A row filter: column equality, or a disjunction of filters.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value` (JSON equality; `null` matches only `null`/absent).
    Eq(&'static str, Value),
    /// Logical OR across the contained filters.
    Or(Vec<Filter>),
}

impl Filter {
    /// Equality filter on a column.
    #[must_use]
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Eq(column, value.into())
    }

    /// Disjunction of filters.
    #[must_use]
    pub fn any(filters: Vec<Self>) -> Self {
        Self::Or(filters)
    }

    /// Whether `row` satisfies this filter.
    ///
    /// A column absent from the row is treated as `null`.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        match self {
            Self::Eq(column, value) => {
                let cell = row.get(column).unwrap_or(&Value::Null);
                cell == value
            }
            Self::Or(filters) => filters.iter().any(|f| f.matches(row)),
        }
    }

    /// Render as a top-level query-string pair in the hosted API's
    /// conventions: `("col", "eq.val")` or `("or", "(a.eq.x,b.eq.y)")`.
    #[must_use]
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => ((*column).to_string(), format!("eq.{}", render(value))),
            Self::Or(filters) => {
                let operands: Vec<String> = filters.iter().map(Self::render_operand).collect();
                ("or".to_string(), format!("({})", operands.join(",")))
            }
        }
    }

    /// Render as an operand inside an `or=(...)` group.
    fn render_operand(&self) -> String {
        match self {
            Self::Eq(column, value) => format!("{column}.eq.{}", render(value)),
            Self::Or(filters) => {
                let operands: Vec<String> = filters.iter().map(Self::render_operand).collect();
                format!("or({})", operands.join(","))
            }
        }
    }
}

/// Render a filter value for the wire. Percent-encoding is the HTTP layer's
/// job; here string values containing combinator syntax are double-quoted so
/// commas and parentheses cannot break an `or=(...)` group.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => quote_if_reserved(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => quote_if_reserved(&other.to_string()),
    }
}

fn quote_if_reserved(s: &str) -> String {
    if s.contains([',', '.', ':', '(', ')', '"', ' ']) {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}

/// Ordering by a column, ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
}

impl Order {
    /// Newest-first ordering on a timestamp column.
    #[must_use]
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    /// Oldest-first ordering on a timestamp column.
    #[must_use]
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    /// Render as a query-string pair: `("order", "created_at.desc")`.
    #[must_use]
    pub fn to_query_pair(self) -> (String, String) {
        let direction = if self.descending { "desc" } else { "asc" };
        ("order".to_string(), format!("{}.{direction}", self.column))
    }
}
