//! Test environment builder for isolated Linthold testing.
//!
//! Provides `TestEnv` - a temporary multi-module build plus an isolated home
//! directory, with helpers to run the Linthold CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{CATALOG, CHECKSTYLE_XML};

const LINTHOLD_VARS: &[&str] = &[
    "LINTHOLD_TOOL",
    "LINTHOLD_CONFIG_FILE",
    "LINTHOLD_MAX_ERRORS",
    "LINTHOLD_MAX_WARNINGS",
    "LINTHOLD_CATALOG",
    "RUST_LOG",
];

/// Result of running a Linthold CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated build with temp directories.
pub struct TestEnv {
    /// Build root
    pub build_root: TempDir,
    /// Temporary directory for HOME / XDG_CONFIG_HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the build root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.build_root.path().join(relative)
    }

    /// Run linthold from the build root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.build_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.build_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_linthold"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");

        for var in LINTHOLD_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute linthold");
        output_to_result(output)
    }

    /// Write a file under the build root
    pub fn write_file(&self, relative_path: &str, content: &str) {
        write(&self.path(relative_path), content);
    }

    /// Write the user-level settings file
    pub fn write_user_settings(&self, content: &str) {
        write(
            &self.home_dir.path().join(".config/linthold/config.toml"),
            content,
        );
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    settings: Option<String>,
    catalog: Option<String>,
    checkstyle: Option<String>,
    modules: Vec<String>,
    root_module: bool,
    files: Vec<(String, String)>,
    settings_gradle: bool,
}

impl TestEnvBuilder {
    /// Conventional layout: catalog, rule set, `settings.gradle.kts`, no modules
    pub fn new() -> Self {
        Self {
            settings: None,
            catalog: Some(CATALOG.to_string()),
            checkstyle: Some(CHECKSTYLE_XML.to_string()),
            modules: Vec::new(),
            root_module: false,
            files: Vec::new(),
            settings_gradle: true,
        }
    }

    /// Write `linthold.toml`
    pub fn with_settings(mut self, toml: &str) -> Self {
        self.settings = Some(toml.to_string());
        self
    }

    pub fn with_catalog(mut self, toml: &str) -> Self {
        self.catalog = Some(toml.to_string());
        self
    }

    pub fn without_catalog(mut self) -> Self {
        self.catalog = None;
        self
    }

    pub fn without_checkstyle_config(mut self) -> Self {
        self.checkstyle = None;
        self
    }

    /// Add a module directory carrying `build.gradle.kts`
    pub fn with_module(mut self, dir: &str) -> Self {
        self.modules.push(dir.to_string());
        self
    }

    pub fn with_modules(mut self, dirs: &[&str]) -> Self {
        self.modules.extend(dirs.iter().map(|d| d.to_string()));
        self
    }

    /// Give the build root its own `build.gradle.kts`
    pub fn with_root_module(mut self) -> Self {
        self.root_module = true;
        self
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn without_settings_gradle(mut self) -> Self {
        self.settings_gradle = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let build_root = TempDir::new().expect("Failed to create build temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");
        let root = build_root.path();

        if self.settings_gradle {
            write(
                &root.join("settings.gradle.kts"),
                "rootProject.name = \"fixture\"\n",
            );
        }
        if let Some(settings) = &self.settings {
            write(&root.join("linthold.toml"), settings);
        }
        if let Some(catalog) = &self.catalog {
            write(&root.join("gradle/libs.versions.toml"), catalog);
        }
        if let Some(checkstyle) = &self.checkstyle {
            write(&root.join("config/checkstyle/checkstyle.xml"), checkstyle);
        }
        if self.root_module {
            write(&root.join("build.gradle.kts"), "plugins { java }\n");
        }
        for module in &self.modules {
            write(
                &root.join(module).join("build.gradle.kts"),
                "plugins { java; checkstyle }\n",
            );
        }
        for (relative, content) in &self.files {
            write(&root.join(relative), content);
        }

        TestEnv {
            build_root,
            home_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
