//! Custom assertion macros for contract and CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Parse NDJSON output into one value per line.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, l))
        })
        .collect()
}

/// Events with the given `event` name
pub fn events_named<'a>(
    events: &'a [serde_json::Value],
    name: &str,
) -> Vec<&'a serde_json::Value> {
    events.iter().filter(|e| e["event"] == name).collect()
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}.\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command failed with exit code 1 and mentions `needle` on stderr.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr, $needle:expr) => {
        assert_eq!(
            $result.exit_code, 1,
            "Expected exit code 1.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
        assert!(
            $result.stderr.contains($needle),
            "Expected stderr to contain '{}'.\nstderr:\n{}",
            $needle,
            $result.stderr
        );
    };
}
