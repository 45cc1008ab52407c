//! Error and success codes with their classification metadata
//!
//! Single source of truth for every code the recognizer emits.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Runtime configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_IO_ERROR: Code = Code::new("E010");
    pub const INVALID_CONFIG: Code = Code::new("E011");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Syntax recognition error codes
pub mod syntax {
    use super::Code;

    pub const GRAMMAR_VIOLATION: Code = Code::new("E043");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E087");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const CONFIGURATION_LOADED: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const SYNTAX_VALIDATION_PASSED: Code = Code::new("I041");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal system error",
                "File a bug report with the offending input",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "System initialization failed",
                "Check logging preferences and compile-time limits",
            ),
            ErrorMetadata::new(
                "E010",
                "Configuration",
                Severity::Medium,
                true,
                "Configuration file could not be read",
                "Check the file path and permissions",
            ),
            ErrorMetadata::new(
                "E011",
                "Configuration",
                Severity::Medium,
                true,
                "Configuration document is not valid TOML for this schema",
                "Fix the reported key or value",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                "Byte outside the token alphabet",
                "Remove or replace the offending character",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                true,
                "Identifier exceeds the configured maximum length",
                "Shorten the identifier",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                "Input produced more tokens than the configured maximum",
                "Split the input into smaller units",
            ),
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::High,
                true,
                "Input does not conform to the grammar",
                "Check the declaration at the reported position",
            ),
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::Medium,
                true,
                "Unexpected token during recognition",
                "Check token sequence and grammar compliance",
            ),
            ErrorMetadata::new(
                "E087",
                "Syntax",
                Severity::High,
                false,
                "Maximum recursion depth exceeded",
                "Reduce nesting depth or simplify structure",
            ),
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I010",
                "Configuration",
                Severity::Low,
                true,
                "Runtime configuration loaded",
                "No action required",
            ),
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                "Tokenization completed",
                "No action required",
            ),
            ErrorMetadata::new(
                "I041",
                "Syntax",
                Severity::Low,
                true,
                "Input accepted by the recognizer",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
