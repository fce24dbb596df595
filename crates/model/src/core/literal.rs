use crate::core::utils::{escape_sql_string, format_number, strip_digit_separators};
use std::fmt;

/// SQL text for a single cell, already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    /// Unquoted numeric token, e.g. `42` or `3.5`.
    Number(String),
    /// Quoted string token with embedded quotes doubled, e.g. `'O''Brien'`.
    Text(String),
}

impl Literal {
    /// Infer the literal form of a (trimmed) cell.
    ///
    /// Empty or missing cells become `NULL`, anything `f64` accepts as a finite
    /// number (optionally with `_` between digits) becomes a numeric token and
    /// the rest is quoted text.
    pub fn classify(cell: Option<&str>) -> Literal {
        let Some(cell) = cell.filter(|c| !c.is_empty()) else {
            return Literal::Null;
        };

        let parsed =
            strip_digit_separators(cell).and_then(|digits| digits.parse::<f64>().ok());
        match parsed {
            // `inf` and `NaN` parse, but are not SQL numerics
            Some(value) if value.is_finite() => Literal::Number(format_number(value)),
            _ => Literal::Text(escape_sql_string(cell)),
        }
    }

    /// A known integer, rendered without going through classification.
    pub fn integer(value: i64) -> Literal {
        Literal::Number(value.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    pub fn as_sql(&self) -> &str {
        match self {
            Literal::Null => "NULL",
            Literal::Number(v) | Literal::Text(v) => v,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
