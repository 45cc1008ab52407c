// RUNTIME PREFERENCES (User Experience)

use crate::logging::{codes, Code};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Errors raised while loading a runtime configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Io { .. } => codes::config::CONFIG_IO_ERROR,
            ConfigError::Parse(_) => codes::config::INVALID_CONFIG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether `tokenize` collects per-class token counts
    pub collect_metrics: bool,

    /// Whether whitespace and comments count towards the totals
    pub include_trivia_in_counts: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_metrics: env::var(env_vars::LEXICAL_COLLECT_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_trivia_in_counts: env::var(env_vars::LEXICAL_INCLUDE_TRIVIA)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxPreferences {
    /// Reject every construction carrying an initialization, so only
    /// `T x;` forms are accepted. Off by default.
    pub legacy_initialization_reject: bool,

    /// Accept `goto label;` as a control statement
    pub allow_goto: bool,

    /// Whether rejected inputs are reported through the logger
    pub log_rejections: bool,
}

/// Constant defaults. Environment overrides go through [`SyntaxPreferences::from_env`].
impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            legacy_initialization_reject: false,
            allow_goto: false,
            log_rejections: true,
        }
    }
}

impl SyntaxPreferences {
    /// Defaults overridden by the `EOP_SYNTAX_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            legacy_initialization_reject: env_flag(
                env_vars::SYNTAX_LEGACY_INITIALIZATION,
                defaults.legacy_initialization_reject,
            ),
            allow_goto: env_flag(env_vars::SYNTAX_ALLOW_GOTO, defaults.allow_goto),
            log_rejections: env_flag(env_vars::SYNTAX_LOG_REJECTIONS, defaults.log_rejections),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub syntax: SyntaxPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Configuration taken from the `EOP_*` environment variables
    pub fn from_env() -> Self {
        Self {
            syntax: SyntaxPreferences::from_env(),
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&document)?;
        crate::log_success!(
            codes::success::CONFIGURATION_LOADED,
            "Runtime configuration loaded",
            "path" => path.display()
        );
        Ok(config)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_COLLECT_METRICS: &str = "EOP_LEXICAL_COLLECT_METRICS";
    pub const LEXICAL_INCLUDE_TRIVIA: &str = "EOP_LEXICAL_INCLUDE_TRIVIA";

    // Syntax
    pub const SYNTAX_LEGACY_INITIALIZATION: &str = "EOP_SYNTAX_LEGACY_INITIALIZATION";
    pub const SYNTAX_ALLOW_GOTO: &str = "EOP_SYNTAX_ALLOW_GOTO";
    pub const SYNTAX_LOG_REJECTIONS: &str = "EOP_SYNTAX_LOG_REJECTIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "EOP_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "EOP_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "EOP_LOGGING_MIN_LEVEL";
}
