use crate::query::ast::{common::TableRef, insert::Insert};
use model::core::literal::Literal;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                columns: Vec::new(),
                values: Vec::new(),
            },
        }
    }

    pub fn columns(mut self, columns: &[String]) -> Self {
        self.ast.columns = columns.to_vec();
        self
    }

    pub fn row(mut self, values: Vec<Literal>) -> Self {
        self.ast.values.push(values);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<Literal>>) -> Self {
        self.ast.values.extend(rows);
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
