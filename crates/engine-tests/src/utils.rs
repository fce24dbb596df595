use engine_core::{
    convert::{Conversion, Converter},
    error::ConvertError,
    settings::ConvertSettings,
};
use std::{fs, io::Write, path::PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// Header plus seven single-column rows.
pub const SEVEN_ROWS_CSV: &str = "n\n1\n2\n3\n4\n5\n6\n7\n";

/// Mixed value types, a quoted delimiter and a blank row.
pub const PRODUCTS_CSV: &str = r#"id,name,price,note
1,"Widget, large",9.99,
2,O'Reilly Guide,15,"said ""hi"""
,,,
3,Gadget,-0.50,n/a
"#;

/// Write `content` to a temporary CSV file kept alive by the returned handle.
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file
}

/// A fresh output path inside its own temp dir.
pub fn output_path(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}

/// Convert without writing anything, panicking on any error.
pub fn convert(settings: ConvertSettings) -> Conversion {
    Converter::new(settings).generate().expect("conversion failed")
}

pub fn try_convert(settings: ConvertSettings) -> Result<Conversion, ConvertError> {
    Converter::new(settings).generate()
}

/// Number of value tuples in a rendered statement.
pub fn tuple_count(statement: &str) -> usize {
    statement.lines().count()
}

pub fn read_output(path: &PathBuf) -> String {
    fs::read_to_string(path).expect("read output file")
}
