/// Column that receives the constant category value.
pub const CATEGORY_ID_COLUMN: &str = "category_id";

/// Target columns for the INSERT statements: the header fields, followed by
/// `category_id` when a category value is supplied. Empty means the column
/// clause is omitted.
pub fn resolve_columns(headers: &[String], category_id: Option<i64>) -> Vec<String> {
    let mut columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    if category_id.is_some() {
        columns.push(CATEGORY_ID_COLUMN.to_string());
    }
    columns
}
