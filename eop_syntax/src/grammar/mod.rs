//! Grammar of the EOP language: keywords and recursive-descent productions

pub mod builders;
pub mod keywords;

pub use builders::{parse_program, Checkpoint, Parser};
pub use keywords::Keyword;
