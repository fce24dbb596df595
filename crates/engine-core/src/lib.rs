pub mod batch;
pub mod columns;
pub mod convert;
pub mod error;
pub mod settings;
