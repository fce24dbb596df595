pub mod literal;
pub mod utils;
