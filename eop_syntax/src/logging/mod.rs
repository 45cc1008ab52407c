//! Global logging for the recognizer
//!
//! A single process-wide [`LoggingService`] is installed once through
//! [`init_global_logging`] or [`init_global_logging_with_service`]. Until then
//! every macro is a silent no-op, so the library can be used without any setup.

pub mod codes;
pub mod config;
pub mod events;
#[macro_use]
pub mod macros;
pub mod service;

use crate::config::RuntimeConfig;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, EventSummary, Logger, LoggingService, MemoryLogger, NullLogger,
    StructuredLogger,
};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging from the installed preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    // Every code the recognizer emits must carry metadata
    let emitted = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::IDENTIFIER_TOO_LONG,
        codes::lexical::TOO_MANY_TOKENS,
        codes::syntax::GRAMMAR_VIOLATION,
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::MAX_RECURSION_DEPTH,
    ];
    for code in emitted {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code.as_str()));
        }
    }

    let logging_service = Arc::new(service::create_configured_service());
    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Install `runtime.logging` as the logging preferences, then initialize
pub fn init_global_logging_with_config(runtime: &RuntimeConfig) -> Result<(), String> {
    config::init_runtime_preferences(runtime.logging.clone())?;
    init_global_logging()
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Used by `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Used by `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::success(code, message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Used by `log_info!`
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::info(message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_helpers_without_logger() {
        // Must not panic whether or not another test installed a logger
        log_error_with_context(
            codes::syntax::GRAMMAR_VIOLATION,
            "rejected",
            Some(crate::utils::Span::new(0, 1)),
            vec![("found", "?")],
        );
        log_success_with_context(codes::success::SYNTAX_VALIDATION_PASSED, "ok", vec![]);
        log_info_with_context("info", vec![("k", "v")]);
    }
}
