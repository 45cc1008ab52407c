//! Recognition errors with logging code mapping

use crate::logging::{codes, Code};
use crate::utils::Position;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Why an input was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// Recognition stopped before the end of input
    #[error("Input rejected at {position}: found {found}")]
    Rejected {
        /// Byte offset of the first unconsumed significant token
        offset: usize,
        position: Position,
        /// Quoted token text, or `end of input`
        found: String,
    },

    #[error("Maximum parse depth of {max_depth} exceeded at {position}")]
    MaxRecursionDepth {
        offset: usize,
        position: Position,
        max_depth: usize,
    },
}

impl SyntaxError {
    pub const END_OF_INPUT: &'static str = "end of input";

    pub fn error_code(&self) -> Code {
        match self {
            Self::Rejected { found, .. } if found == Self::END_OF_INPUT => {
                codes::syntax::GRAMMAR_VIOLATION
            }
            Self::Rejected { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Self::Rejected { offset, .. } | Self::MaxRecursionDepth { offset, .. } => *offset,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Rejected { position, .. } | Self::MaxRecursionDepth { position, .. } => {
                *position
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}
