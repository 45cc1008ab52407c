//! Shared source-location primitives used by the scanner, parser and logging.

pub mod span;

pub use span::{Position, SourceMap, Span};
