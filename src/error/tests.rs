//! Error type tests
//!
//! Tests for ImportError enum and its conversions.

#![allow(clippy::expect_used)]

use super::*;
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = ImportError::Cancelled {
        step: "registerDependencies".to_string(),
    };
    assert_eq!(err.to_string(), "Cancelled at registerDependencies");
}

#[test]
fn test_error_code() {
    let err = config_not_found("aurelia_project/aurelia.json");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("bundlepac::config::not_found".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ImportError = io_err.into();
    assert!(matches!(err, ImportError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: ImportError = parse_result
        .expect_err("YAML parsing should have failed")
        .into();
    assert!(matches!(err, ImportError::ConfigParseFailed { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let err: ImportError = parse_result
        .expect_err("JSON parsing should have failed")
        .into();
    assert!(matches!(err, ImportError::ConfigParseFailed { .. }));
}

#[test]
fn test_only_cancellation_is_cancelled() {
    assert!(cancelled("installTasks").is_cancelled());
    assert!(!patch_failed(["bad path"]).is_cancelled());
    assert!(!ImportError::BundlesMissing.is_cancelled());
}

test_error_contains!(
    test_patch_failed_lists_every_error,
    patch_failed(["missing /a", "test failed at /b"]),
    "missing /a",
    "test failed at /b"
);

test_error_contains!(
    test_task_not_found_lists_search_paths,
    task_not_found("prepare-materialize", ["pkg/install", "builtin/tasks"]),
    "prepare-materialize",
    "pkg/install, builtin/tasks"
);

test_error_contains!(
    test_bundles_missing,
    bundles_missing(),
    "bundles section is missing"
);

test_error_contains!(
    test_script_failed,
    script_failed("npm run build", "exit status: 1"),
    "npm run build",
    "exit status: 1"
);

test_error_contains!(
    test_hook_failed,
    hook_failed("prepareAssets", "gulp", "not found"),
    "prepareAssets",
    "gulp"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("bundlepac.yaml", "bad indent"),
    "Failed to parse configuration file"
);

test_error_contains!(
    test_config_invalid,
    config_invalid("project manifest is empty"),
    "Invalid configuration"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("aurelia.json", "permission denied"),
    "Failed to read configuration file"
);

test_error_contains!(
    test_file_not_found,
    file_not_found("/path/to/file.txt"),
    "File not found"
);

test_error_contains!(
    test_file_read_failed,
    file_read_failed("/path/to/file.txt", "permission denied"),
    "Failed to read file"
);

test_error_contains!(
    test_file_write_failed,
    file_write_failed("/path/to/file.txt", "disk full"),
    "Failed to write file"
);

test_error_contains!(test_io_error, io_error("some error"), "IO error");
