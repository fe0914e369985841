//! Shell access and build-tool detection.
//!
//! cpm shells out exactly once per `create`: `cmake --version` is redirected
//! into the scratch file `cpm.tmp`, whose first line is parsed for the version
//! written into `cmake_minimum_required`. `main` deletes the scratch file on
//! every exit path.

use crate::logger::Logger;
use anyhow::{Context, Result};
use semver::Version;
use std::fs;
use std::path::Path;
use std::process::Command;

pub const SCRATCH_FILE: &str = "cpm.tmp";
pub const FALLBACK_CMAKE_VERSION: &str = "3.16";

pub trait Shell {
    /// Runs `command` through the platform shell inside `cwd`, returning its exit code.
    fn execute(&self, command: &str, cwd: &Path) -> Result<i32>;
}

pub struct SystemShell;

impl Shell for SystemShell {
    fn execute(&self, command: &str, cwd: &Path) -> Result<i32> {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C");
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c");
            c
        };

        let status = cmd
            .arg(command)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("Failed to run '{command}'"))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Extracts the version from `cmake --version` output
/// (`cmake version 3.28.1` on the first line).
///
/// Accepts `major.minor.patch` and `major.minor`; pre-release suffixes such as
/// `3.29.0-rc2` are reduced to their numeric core.
pub fn parse_cmake_version(output: &str) -> Option<String> {
    let token = output.lines().next()?.split_whitespace().nth(2)?;

    if let Ok(version) = Version::parse(token) {
        return Some(format!(
            "{}.{}.{}",
            version.major, version.minor, version.patch
        ));
    }

    let parts: Vec<&str> = token.split('.').take(3).collect();
    let numeric = |s: &&str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if parts.len() >= 2 && parts[..2].iter().all(numeric) {
        return Some(format!("{}.{}", parts[0], parts[1]));
    }

    None
}

/// Queries the installed CMake through the scratch file. Falls back to
/// [`FALLBACK_CMAKE_VERSION`] with a warning when cmake is missing or its
/// output cannot be read.
pub fn cmake_version(shell: &dyn Shell, root: &Path, logger: &Logger) -> String {
    let command = format!("cmake --version > {SCRATCH_FILE}");
    logger.execute(&command);

    let detected = shell
        .execute(&command, root)
        .ok()
        .filter(|code| *code == 0)
        .and_then(|_| fs::read_to_string(root.join(SCRATCH_FILE)).ok())
        .and_then(|output| parse_cmake_version(&output));

    match detected {
        Some(version) => version,
        None => {
            logger.warn_q(
                "could not be detected, falling back to minimum version",
                "cmake",
            );
            FALLBACK_CMAKE_VERSION.to_string()
        }
    }
}

/// Whether `program --version` can be spawned at all.
pub fn is_available(program: &str) -> bool {
    Command::new(program).arg("--version").output().is_ok()
}

/// Removes the scratch file if present.
pub fn cleanup_scratch(root: &Path) {
    let _ = fs::remove_file(root.join(SCRATCH_FILE));
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records commands and writes canned output into the scratch file.
    pub struct FakeShell {
        pub output: Option<String>,
        pub exit_code: i32,
        pub commands: RefCell<Vec<String>>,
    }

    impl FakeShell {
        pub fn with_output(output: &str) -> Self {
            Self {
                output: Some(output.to_string()),
                exit_code: 0,
                commands: RefCell::new(Vec::new()),
            }
        }

        pub fn missing() -> Self {
            Self {
                output: None,
                exit_code: 127,
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl Shell for FakeShell {
        fn execute(&self, command: &str, cwd: &Path) -> Result<i32> {
            self.commands.borrow_mut().push(command.to_string());
            fs::write(cwd.join(SCRATCH_FILE), self.output.clone().unwrap_or_default())?;
            Ok(self.exit_code)
        }
    }
}
