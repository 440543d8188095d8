pub mod error;
pub mod printer;
pub mod reader;
pub mod syntax;

pub use printer::{generate, generate_program};
pub use reader::parse;

pub type Result<T> = std::result::Result<T, error::Error>;
