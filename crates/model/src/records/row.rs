/// One record read from a delimited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowData {
    /// Line on which the record starts (1-based).
    pub line: u64,
    pub cells: Vec<String>,
}

impl RowData {
    pub fn new(line: u64, cells: Vec<String>) -> Self {
        RowData { line, cells }
    }

    /// True when every cell is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}
