use model::core::literal::Literal;
use planner::query::{
    ast::{common::TableRef, insert::Insert},
    builder::insert::InsertBuilder,
};
use std::mem;

/// Groups value tuples into INSERT statements without reordering them.
///
/// A batch size of 0 produces one statement per row. Otherwise rows are held
/// until `batch_size` of them are pending or the final row arrives.
pub struct StatementBatcher {
    table: TableRef,
    columns: Vec<String>,
    batch_size: usize,
    pending: Vec<Vec<Literal>>,
}

impl StatementBatcher {
    pub fn new(table: &str, columns: Vec<String>, batch_size: usize) -> Self {
        StatementBatcher {
            table: TableRef::new(table),
            columns,
            batch_size,
            pending: Vec::with_capacity(batch_size),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Adds a row, returning a statement when one is complete. `is_last`
    /// marks the final data record of the input.
    pub fn push(&mut self, row: Vec<Literal>, is_last: bool) -> Option<Insert> {
        if self.batch_size == 0 {
            return Some(self.build(vec![row]));
        }

        self.pending.push(row);
        if self.pending.len() >= self.batch_size || is_last {
            self.flush()
        } else {
            None
        }
    }

    /// Flushes whatever is still pending.
    pub fn finish(&mut self) -> Option<Insert> {
        self.flush()
    }

    fn flush(&mut self) -> Option<Insert> {
        if self.pending.is_empty() {
            return None;
        }
        let rows = mem::take(&mut self.pending);
        Some(self.build(rows))
    }

    fn build(&self, rows: Vec<Vec<Literal>>) -> Insert {
        InsertBuilder::new(self.table.clone())
            .columns(&self.columns)
            .rows(rows)
            .build()
    }
}
