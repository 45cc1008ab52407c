use eop_syntax::config::runtime::{LogLevel as PreferredLevel, LoggingPreferences};
use eop_syntax::logging::{config, init_global_logging_with_config, is_initialized, LogLevel};
use eop_syntax::{parse, RuntimeConfig};

#[test]
fn test_init_from_runtime_config() {
    let runtime = RuntimeConfig {
        logging: LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: PreferredLevel::Warning,
        },
        ..RuntimeConfig::default()
    };

    init_global_logging_with_config(&runtime).unwrap();
    assert!(is_initialized());
    assert_eq!(config::get_min_log_level(), LogLevel::Warning);

    // Preferences and logger are installed once per process
    assert!(init_global_logging_with_config(&runtime).is_err());
    assert!(parse("struct pair;"));
}
