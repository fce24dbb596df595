//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the name of the dialect (e.g., "MySQL").
    fn name(&self) -> String;
}

/// Backtick-quoted identifiers. Names are not validated or escaped.
#[derive(Debug, Clone, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}
