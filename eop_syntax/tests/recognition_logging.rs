//! Coded events emitted while recognizing input
//!
//! The global logger can only be installed once per process, so every check
//! runs inside a single test against one shared `MemoryLogger`.

use eop_syntax::config::compile_time::syntax::MAX_PARSE_DEPTH;
use eop_syntax::logging::{
    codes, init_global_logging_with_service, LogLevel, LoggingService, MemoryLogger,
};
use eop_syntax::utils::Span;
use eop_syntax::{recognize, recognize_with_preferences, SyntaxError, SyntaxPreferences};
use std::sync::Arc;

fn install_memory_logger() -> Arc<MemoryLogger> {
    let logger = Arc::new(MemoryLogger::new());
    let service = LoggingService::new(logger.clone(), LogLevel::Info);
    init_global_logging_with_service(Arc::new(service)).unwrap();
    logger
}

#[test]
fn test_recognition_events() {
    let logger = install_memory_logger();

    // Acceptance
    assert_eq!(recognize("int main() { }"), Ok(()));
    assert!(logger.has_success_with_code(codes::success::SYNTAX_VALIDATION_PASSED));
    assert_eq!(logger.get_errors().len(), 0);
    logger.clear();

    // Unexpected token
    assert!(recognize("void f();\nint 5();").is_err());
    assert!(logger.has_error_with_code(codes::syntax::UNEXPECTED_TOKEN));
    let rejected = logger.get_events_with_code(codes::syntax::UNEXPECTED_TOKEN);
    assert_eq!(rejected[0].span, Some(Span::new(14, 15)));
    assert!(!logger.has_success_with_code(codes::success::SYNTAX_VALIDATION_PASSED));
    logger.clear();

    // Invalid byte
    assert!(recognize("?").is_err());
    assert!(logger.has_error_with_code(codes::lexical::INVALID_CHARACTER));
    assert!(!logger.has_error_with_code(codes::syntax::UNEXPECTED_TOKEN));
    logger.clear();

    // Depth overflow is reported once, by the parser
    let source = format!(
        "void f() {{ x = {}1{}; }}",
        "(".repeat(MAX_PARSE_DEPTH + 10),
        ")".repeat(MAX_PARSE_DEPTH + 10)
    );
    assert!(matches!(
        recognize(&source),
        Err(SyntaxError::MaxRecursionDepth { .. })
    ));
    assert_eq!(
        logger
            .get_events_with_code(codes::syntax::MAX_RECURSION_DEPTH)
            .len(),
        1
    );
    logger.clear();

    // Quiet rejections produce no error event
    let quiet = SyntaxPreferences {
        log_rejections: false,
        ..SyntaxPreferences::default()
    };
    assert!(recognize_with_preferences(b"struct;", quiet).is_err());
    assert_eq!(logger.get_errors().len(), 0);
}
