pub mod common;
pub mod insert;
