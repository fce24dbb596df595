pub mod file;
pub mod sink;
