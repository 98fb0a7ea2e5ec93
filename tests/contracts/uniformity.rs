//! Every module of a build resolves to the same tool, rule set and policy.

use crate::common::*;
use crate::{assert_failure, assert_success};

/// CONTRACT: all modules share one fingerprint
#[test]
fn contract_all_modules_resolve_identically() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_root_module()
        .with_modules(&["api", "proxy", "proxy/native"])
        .build();

    let result = env.run(&["--json", "resolve"]);
    assert_success!(result);

    let events = json_lines(&result.stdout);
    let configured = events_named(&events, "module_configured");
    let names: Vec<&str> = configured
        .iter()
        .map(|e| e["module"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec![":", ":api", ":proxy", ":proxy:native"]);

    let fingerprint = &configured[0]["fingerprint"];
    for event in &configured {
        assert_eq!(&event["fingerprint"], fingerprint);
        assert_eq!(event["tool"], "checkstyle");
        assert_eq!(event["tool_version"], "10.3");
        assert_eq!(event["max_errors"], 100);
        assert_eq!(event["max_warnings"], 100);
    }

    let complete = events_named(&events, "complete");
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0]["uniform"], true);
    assert_eq!(complete[0]["module_count"], 4);
}

/// CONTRACT: the rule set resolves against the build root, never the module
#[test]
fn contract_config_file_is_anchored_at_build_root() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_modules(&["api", "proxy/native"])
        .build();

    let result = env.run(&["--json", "resolve"]);
    assert_success!(result);

    let expected = env
        .path("config/checkstyle/checkstyle.xml")
        .canonicalize()
        .unwrap();
    for event in events_named(&json_lines(&result.stdout), "module_configured") {
        assert_eq!(
            event["config_file"].as_str().unwrap(),
            expected.display().to_string()
        );
    }
}

/// CONTRACT: a module-local rule set with the same relative path is ignored
#[test]
fn contract_module_local_config_is_not_used() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_module("api")
        .with_file("api/config/checkstyle/checkstyle.xml", "<module name=\"Other\"/>")
        .build();

    let result = env.run(&["--json", "resolve"]);
    assert_success!(result);

    let expected = env
        .path("config/checkstyle/checkstyle.xml")
        .canonicalize()
        .unwrap();
    let events = json_lines(&result.stdout);
    let configured = events_named(&events, "module_configured");
    assert_eq!(
        configured[0]["config_file"].as_str().unwrap(),
        expected.display().to_string()
    );
}

/// CONTRACT: text output reports a uniform build
#[test]
fn contract_text_output_summarizes_modules() {
    let env = TestEnv::builder()
        .with_settings(SETTINGS_100)
        .with_modules(&["api", "proxy"])
        .build();

    let result = env.run(&["resolve"]);
    assert_success!(result);
    assert!(result.stdout.contains("Resolved 2 modules (uniform)"), "{}", result.stdout);
    assert!(result.stdout.contains(":api"));
    assert!(result.stdout.contains(":proxy"));
    assert!(result.stdout.contains("checkstyle 10.3"));
    assert!(result
        .stdout
        .contains("max 100 errors, max 100 warnings"));
}

/// CONTRACT: one broken module fails the whole resolve
#[test]
fn contract_missing_declared_module_fails_resolve() {
    let env = TestEnv::builder()
        .with_settings(&format!("{}\n[modules]\nmembers = [\"api\", \"gone\"]\n", SETTINGS_100))
        .with_module("api")
        .build();

    let result = env.run(&["resolve"]);
    assert_failure!(result, "module directory not found");
}
