//! Defines the AST for an INSERT statement.

use crate::query::ast::common::TableRef;
use model::core::literal::Literal;

/// Represents a complete INSERT statement.
///
/// This structure supports both single-row and multi-row (batch) inserts
/// through the `values` field, which is a list of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    /// Target columns. When empty the column clause is omitted and values
    /// bind to the table's own column order.
    pub columns: Vec<String>,
    /// The rows of values to be inserted. Each inner vector represents a single row.
    pub values: Vec<Vec<Literal>>,
}

impl Insert {
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}
