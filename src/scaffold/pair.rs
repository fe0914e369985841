use super::artifact::TemplateArtifact;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::paths::{self, ResolvedPaths};
use std::path::{Path, PathBuf};

pub const INCLUDE_GUARD: &str = "#pragma once";

/// Text for both halves of a pair. A `None` source removes any existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairContent {
    pub header: Vec<String>,
    pub source: Option<Vec<String>>,
}

impl PairContent {
    /// Include guard only in the header, a single include in the source.
    pub fn plain(include: &str) -> Self {
        Self {
            header: vec![INCLUDE_GUARD.to_string()],
            source: Some(vec![include_line(include)]),
        }
    }
}

pub fn include_line(path: &str) -> String {
    format!("#include \"{path}\"")
}

pub fn write_pair(root: &Path, paths: &ResolvedPaths, content: &PairContent) -> Result<()> {
    TemplateArtifact::write(&paths.header, content.header.iter().cloned()).flush(root)?;

    let source = match &content.source {
        Some(lines) => TemplateArtifact::write(&paths.source, lines.iter().cloned()),
        None => TemplateArtifact::delete(&paths.source),
    };
    source.flush(root)?;

    Ok(())
}

/// Creates a plain header/source pair for `name`.
pub fn create_pair(
    root: &Path,
    config: &ProjectConfig,
    name: &str,
    use_hpp: bool,
) -> Result<ResolvedPaths> {
    paths::validate_name("name", name)?;
    let resolved = paths::resolve(name, use_hpp, config);
    let include = paths::source_include(&resolved, name, use_hpp);
    write_pair(root, &resolved, &PairContent::plain(&include))?;
    Ok(resolved)
}

/// Deletes every header/source variant of `name` in both layouts.
/// Missing files are skipped; returns the paths actually removed.
pub fn remove_pair(root: &Path, name: &str) -> Result<Vec<PathBuf>> {
    paths::validate_name("name", name)?;
    let mut removed = Vec::new();
    for candidate in paths::removal_candidates(name) {
        let artifact = TemplateArtifact::delete(candidate);
        if artifact.flush(root)? {
            removed.push(artifact.path().to_path_buf());
        }
    }
    Ok(removed)
}
