//! `cpm test`: a self-check of the current project.
//!
//! Reports the recorded configuration, warns about missing layout directories
//! and looks for cmake. Only an invalid recorded state fails the command.

use super::Context;
use crate::config::{
    KEY_DEFAULT_STRUCTURE, KEY_LANGUAGE, KEY_NAME, KEY_STANDARD, KEY_STRUCTURE, Layout,
    ProjectConfig,
};
use crate::paths::{INCLUDE_DIR, SOURCE_DIR};
use crate::toolchain;
use anyhow::Result;

/// Outcome of the self-check, separate from logging so it can be asserted on.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub missing_dirs: Vec<&'static str>,
    pub cmake_found: bool,
    /// Keys set through `cpm config` that cpm itself does not interpret.
    pub extra_keys: Vec<String>,
}

const KNOWN_KEYS: [&str; 5] = [
    KEY_LANGUAGE,
    KEY_STRUCTURE,
    KEY_DEFAULT_STRUCTURE,
    KEY_NAME,
    KEY_STANDARD,
];

pub fn self_test(ctx: &mut Context) -> Result<()> {
    let report = inspect(ctx, toolchain::is_available("cmake"))?;
    if report.missing_dirs.is_empty() && report.cmake_found {
        ctx.logger.success("project looks healthy");
    }
    Ok(())
}

fn inspect(ctx: &Context, cmake_found: bool) -> Result<CheckReport> {
    let config = ProjectConfig::from_store(ctx.store)?;
    let mut report = CheckReport {
        cmake_found,
        ..Default::default()
    };

    ctx.logger.success(&format!("language: {}", config.language));
    ctx.logger.success(&format!("structure: {}", config.structure));
    let layout = match config.layout {
        Layout::Prefixed => "prefixed (include/, src/)",
        Layout::Flat => "flat",
    };
    ctx.logger.success(&format!("layout: {layout}"));
    if let Some(name) = ctx.store.get(KEY_NAME) {
        ctx.logger.success(&format!("name: {name}"));
    }
    if let Some(standard) = ctx.store.get(KEY_STANDARD) {
        ctx.logger.success(&format!("standard: {standard}"));
    }
    for (key, value) in ctx.store.iter() {
        if !KNOWN_KEYS.contains(&key) {
            ctx.logger.success(&format!("{key}: {value}"));
            report.extra_keys.push(key.to_string());
        }
    }

    if config.layout == Layout::Prefixed {
        for dir in [INCLUDE_DIR, SOURCE_DIR] {
            if !ctx.root.join(dir).is_dir() {
                ctx.logger.warn_q("directory is missing", dir);
                report.missing_dirs.push(dir);
            }
        }
    }

    if cmake_found {
        ctx.logger.success_q("found on PATH", "cmake");
    } else {
        ctx.logger.warn_q("not found on PATH (optional)", "cmake");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Context;
    use crate::commands::testing::Harness;
    use crate::error::CpmError;

    fn inspect_harness(h: &mut Harness, cmake_found: bool) -> Result<CheckReport> {
        let ctx = Context {
            root: h.root().to_path_buf(),
            logger: &h.logger,
            store: &mut h.store,
            prompter: &mut h.prompter,
            shell: &h.shell,
        };
        inspect(&ctx, cmake_found)
    }

    #[test]
    fn test_missing_layout_dirs() {
        let mut h = Harness::project("cpp", "executable");
        std::fs::create_dir(h.root().join("include")).unwrap();

        let report = inspect_harness(&mut h, true).unwrap();
        assert_eq!(report.missing_dirs, vec!["src"]);
    }

    #[test]
    fn test_flat_layout_needs_no_dirs() {
        let mut h = Harness::project("c", "simple");
        let report = inspect_harness(&mut h, false).unwrap();
        assert_eq!(
            report,
            CheckReport {
                missing_dirs: Vec::new(),
                cmake_found: false,
                extra_keys: Vec::new(),
            }
        );
    }

    #[test]
    fn test_reports_free_form_keys() {
        let mut h = Harness::project("cpp", "simple");
        h.run("config", &["set", "author", "ada"]).unwrap();
        h.run("config", &["set", "standard", "17"]).unwrap();

        let report = inspect_harness(&mut h, true).unwrap();
        assert_eq!(report.extra_keys, vec!["author".to_string()]);
    }

    #[test]
    fn test_invalid_state_fails() {
        let mut h = Harness::project("java", "simple");
        let err = h.run("test", &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CpmError>(),
            Some(CpmError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_runs_on_valid_project() {
        let mut h = Harness::project("cpp", "simple");
        h.run("test", &[]).unwrap();
    }
}
