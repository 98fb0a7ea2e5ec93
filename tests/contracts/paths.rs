//! Path handling: build root discovery and the shared rule set location.

use crate::common::*;
use crate::{assert_failure, assert_success};

/// CONTRACT: a missing rule set fails with the resolved path
#[test]
fn contract_missing_config_file_fails() {
    let env = TestEnv::builder()
        .without_checkstyle_config()
        .with_module("api")
        .build();

    let result = env.run(&["resolve"]);
    assert_failure!(result, "configuration file not found");
    assert!(
        result.stderr.contains("config/checkstyle/checkstyle.xml"),
        "{}",
        result.stderr
    );
}

/// CONTRACT: a directory where the rule set should be is rejected
#[test]
fn contract_config_path_directory_fails() {
    let env = TestEnv::builder()
        .without_checkstyle_config()
        .with_file("config/checkstyle/checkstyle.xml/keep", "")
        .with_module("api")
        .build();

    let result = env.run(&["resolve"]);
    assert_failure!(result, "configuration path is not a file");
}

/// CONTRACT: running inside a module finds the enclosing build
#[test]
fn contract_run_from_module_directory() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_modules(&["api", "proxy"])
        .build();

    let result = env.run_from(&env.path("api"), &["--json", "resolve"]);
    assert_success!(result);

    let events = json_lines(&result.stdout);
    assert_eq!(events_named(&events, "module_configured").len(), 2);
}

/// CONTRACT: `check` without `-m` checks the module it is run in
#[test]
fn contract_check_defaults_to_current_module() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_module("proxy/native")
        .with_file("proxy/native/report.json", &counts_report(1, 1))
        .build();

    let result = env.run_from(&env.path("proxy/native"), &["check", "-r", "report.json"]);
    assert_success!(result);
    assert!(result.stdout.contains(":proxy:native passed"), "{}", result.stdout);
}

/// CONTRACT: from a module's subdirectory `check` names the module, not the subdirectory
#[test]
fn contract_check_from_nested_dir_uses_enclosing_module() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_module("api")
        .with_file("api/src/main/java/App.java", "class App {}\n")
        .with_file("report.json", &counts_report(101, 0))
        .build();

    let report = env.path("report.json");
    let result = env.run_from(
        &env.path("api/src/main/java"),
        &["check", "-r", report.to_str().unwrap()],
    );
    assert_failure!(result, "thresholds exceeded for :api:");
    assert!(!result.stderr.contains(":api:src"), "{}", result.stderr);
    assert!(result.stdout.contains(":api failed"), "{}", result.stdout);
}

/// CONTRACT: `-C` selects the build root explicitly
#[test]
fn contract_explicit_root_flag() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_module("api")
        .build();
    let elsewhere = tempfile::tempdir().unwrap();

    let root = env.build_root.path().to_str().unwrap();
    let result = env.run_from(elsewhere.path(), &["-C", root, "modules"]);
    assert_success!(result);
    assert_eq!(result.stdout, ":api\n");
}

/// CONTRACT: a module outside the build root is rejected
#[test]
fn contract_module_outside_root_fails() {
    let env = TestEnv::builder().with_module("api").build();
    let outside = tempfile::tempdir().unwrap();
    std::fs::write(outside.path().join("report.json"), counts_report(0, 0)).unwrap();

    let result = env.run(&[
        "check",
        "-m",
        outside.path().to_str().unwrap(),
        "-r",
        "report.json",
    ]);
    assert_eq!(result.exit_code, 1, "{}", result.stderr);
    assert!(result.stderr.contains("outside build root"), "{}", result.stderr);
}

/// CONTRACT: gitignored directories are not modules
#[test]
fn contract_gitignored_modules_are_skipped() {
    let env = TestEnv::builder()
        .with_modules(&["api", "build/generated"])
        .with_file(".gitignore", "build/\n")
        .build();

    let result = env.run(&["modules"]);
    assert_success!(result);
    assert_eq!(result.stdout, ":api\n");
}
