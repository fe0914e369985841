//! `cpm create <c|cpp>`
//!
//! Collects the project name, structure and git preference (flags first, then
//! prompts), writes the template files and records the project in `cpm.toml`.

use super::Context;
use crate::config::{
    self, DEFAULT_STANDARD, KEY_DEFAULT_STRUCTURE, KEY_LANGUAGE, KEY_NAME, KEY_STANDARD,
    KEY_STRUCTURE, Language, Structure,
};
use crate::error::CpmError;
use crate::flags::ParsedArgs;
use crate::templates::{self, EXECUTABLE_DIRS, ProjectSpec};
use crate::toolchain;
use anyhow::{Context as _, Result};
use std::fs;

pub fn create_project(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let language: Language = args.positional(0).unwrap_or_default().parse()?;

    let standard = match args.flag_value("std") {
        Some(value) => {
            config::validate_standard(value)?;
            value.to_string()
        }
        None => DEFAULT_STANDARD.to_string(),
    };

    // Reject a bad flag before asking anything.
    let structure_flag = args
        .flag_value_any(&["structure"])
        .map(str::parse::<Structure>)
        .transpose()?;

    let name = match args.flag_value_any(&["name"]) {
        Some(name) => name.to_string(),
        None => prompt_name(ctx)?,
    };

    let structure = match structure_flag {
        Some(structure) => structure,
        None => prompt_structure(ctx)?,
    };

    let git = if args.has_flag("git") {
        true
    } else if args.has_flag("no-git") {
        false
    } else {
        ctx.prompter.confirm("Initialise a git repository?", false)?
    };

    let cmake_version = match structure {
        Structure::Executable => {
            for dir in EXECUTABLE_DIRS {
                let path = ctx.root.join(dir);
                fs::create_dir_all(&path).map_err(|e| CpmError::io("create", &path, e))?;
            }
            toolchain::cmake_version(ctx.shell, &ctx.root, ctx.logger)
        }
        Structure::Simple => toolchain::FALLBACK_CMAKE_VERSION.to_string(),
    };

    let spec = ProjectSpec {
        name,
        language,
        structure,
        standard,
        cmake_version,
        git,
    };

    for artifact in templates::project_artifacts(&spec) {
        artifact.flush(&ctx.root)?;
        ctx.logger.success_q("written", &artifact.path().display().to_string());
    }

    if git && !ctx.root.join(".git").exists() {
        git2::Repository::init(&ctx.root).with_context(|| {
            format!("Failed to initialise git repository in {}", ctx.root.display())
        })?;
        ctx.logger.success("initialised git repository");
    }

    ctx.store.set(KEY_LANGUAGE, language.as_str());
    ctx.store.set(KEY_STRUCTURE, structure.as_str());
    ctx.store.set(KEY_NAME, spec.name.as_str());
    ctx.store.set(KEY_STANDARD, spec.standard.as_str());

    ctx.logger
        .success_q(&format!("created ({language}, {structure})"), &spec.name);
    Ok(())
}

fn prompt_name(ctx: &mut Context) -> Result<String> {
    let default = ctx
        .root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string());

    let answer = ctx.prompter.text("Project name:", Some(default.as_str()))?;
    Ok(if answer.is_empty() { default } else { answer })
}

/// Re-prompts until the answer names a known structure. Empty input takes the
/// recorded `default_structure`, else `executable`.
fn prompt_structure(ctx: &mut Context) -> Result<Structure> {
    let default = ctx
        .store
        .get(KEY_DEFAULT_STRUCTURE)
        .and_then(|s| s.parse::<Structure>().ok())
        .unwrap_or(Structure::Executable);

    loop {
        let answer = ctx
            .prompter
            .text("Project structure (executable, simple):", Some(default.as_str()))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<Structure>() {
            Ok(structure) => return Ok(structure),
            Err(err) => ctx.logger.warn(&err.to_string()),
        }
    }
}
