//! Finding counts are compared to the policy with `<=` on both axes.

use crate::common::*;
use crate::{assert_failure, assert_success};

fn env_with_report(errors: u64, warnings: u64) -> TestEnv {
    TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_module("api")
        .with_file("api/build/reports/checkstyle.json", &counts_report(errors, warnings))
        .build()
}

fn check(env: &TestEnv) -> TestResult {
    env.run(&["check", "-m", "api", "-r", "api/build/reports/checkstyle.json"])
}

/// CONTRACT: counts exactly at the limits pass
#[test]
fn contract_counts_at_limit_pass() {
    let env = env_with_report(100, 100);
    let result = check(&env);
    assert_success!(result);
    assert!(result.stdout.contains(":api passed"), "{}", result.stdout);
}

/// CONTRACT: one error over the limit fails with exit code 1
#[test]
fn contract_error_over_limit_fails() {
    let env = env_with_report(101, 0);
    let result = check(&env);
    assert_failure!(result, "errors 101 > 100");
    assert!(result.stdout.contains(":api failed"), "{}", result.stdout);
}

/// CONTRACT: warnings are an independent axis
#[test]
fn contract_warning_over_limit_fails() {
    let env = env_with_report(0, 101);
    let result = check(&env);
    assert_failure!(result, "warnings 101 > 100");
}

/// CONTRACT: both violations are reported together
#[test]
fn contract_both_axes_reported() {
    let env = env_with_report(150, 200);
    let result = check(&env);
    assert_failure!(result, "errors 150 > 100, warnings 200 > 100");
}

/// CONTRACT: command-line thresholds replace the configured ones
#[test]
fn contract_cli_thresholds_override_settings() {
    let env = env_with_report(101, 0);
    let result = env.run(&[
        "check",
        "-m",
        "api",
        "-r",
        "api/build/reports/checkstyle.json",
        "--max-errors",
        "200",
    ]);
    assert_success!(result);
    assert!(result.stdout.contains("errors    101 / 200"), "{}", result.stdout);
}

/// CONTRACT: default policy tolerates nothing
#[test]
fn contract_default_policy_is_zero_tolerance() {
    let env = TestEnv::builder()
        .with_module("api")
        .with_file("report.json", &counts_report(0, 1))
        .build();

    let result = env.run(&["check", "-m", "api", "-r", "report.json"]);
    assert_failure!(result, "warnings 1 > 0");
}

/// CONTRACT: a findings list is tallied by severity; info does not count
#[test]
fn contract_findings_list_is_tallied() {
    let env = TestEnv::builder()
        .with_module("api")
        .with_file("report.json", FINDINGS_REPORT)
        .build();

    let result = env.run(&[
        "--json",
        "check",
        "-m",
        "api",
        "-r",
        "report.json",
        "--max-errors",
        "1",
        "--max-warnings",
        "1",
    ]);
    assert_success!(result);

    let events = json_lines(&result.stdout);
    let checked = events_named(&events, "module_checked");
    assert_eq!(checked[0]["errors"], 1);
    assert_eq!(checked[0]["warnings"], 1);
    assert_eq!(checked[0]["pass"], true);
}

/// CONTRACT: an unreadable report is an error, not a pass
#[test]
fn contract_malformed_report_fails() {
    let env = TestEnv::builder()
        .with_module("api")
        .with_file("report.json", "{ \"status\": \"ok\" }")
        .build();

    let result = env.run(&["check", "-m", "api", "-r", "report.json"]);
    assert_failure!(result, "invalid finding report");
}
