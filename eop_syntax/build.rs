// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
    max_identifier_length: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_parse_depth: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=EOP_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=EOP_CONFIG_DIR");

    let profile = env::var("EOP_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("EOP_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the eop_syntax directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_PARSE_DEPTH: usize = 4_096;
    const ABSOLUTE_MIN_PARSE_DEPTH: usize = 8;

    if config.syntax.max_parse_depth > ABSOLUTE_MAX_PARSE_DEPTH {
        panic!("LIMITS: max_parse_depth exceeds absolute maximum");
    }

    if config.syntax.max_parse_depth < ABSOLUTE_MIN_PARSE_DEPTH {
        panic!("LIMITS: max_parse_depth below absolute minimum");
    }

    if config.lexical.max_identifier_length == 0 || config.lexical.max_token_count == 0 {
        panic!("LIMITS: lexical limits must be non-zero");
    }

    if config.logging.log_buffer_size == 0 {
        panic!("LIMITS: log_buffer_size must be non-zero");
    }

    if profile == "production" && config.syntax.max_parse_depth > 256 {
        panic!("PRODUCTION: max_parse_depth too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_PARSE_DEPTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.lexical.max_token_count,
        config.lexical.max_identifier_length,
        config.syntax.max_parse_depth,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
