use crate::error::{CpmError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A single pending filesystem effect, flushed as soon as it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateArtifact {
    /// Replace `path` with `lines`, each terminated by `\n`.
    Write { path: PathBuf, lines: Vec<String> },
    /// Remove `path` if it exists.
    Delete { path: PathBuf },
}

impl TemplateArtifact {
    pub fn write<I, S>(path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TemplateArtifact::Write {
            path: path.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delete(path: impl Into<PathBuf>) -> Self {
        TemplateArtifact::Delete { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        match self {
            TemplateArtifact::Write { path, .. } | TemplateArtifact::Delete { path } => path,
        }
    }

    pub fn contents(&self) -> Option<String> {
        match self {
            TemplateArtifact::Write { lines, .. } if lines.is_empty() => Some(String::new()),
            TemplateArtifact::Write { lines, .. } => {
                let mut text = lines.join("\n");
                text.push('\n');
                Some(text)
            }
            TemplateArtifact::Delete { .. } => None,
        }
    }

    /// Applies the artifact below `root`. Parent directories are created for
    /// writes; deleting a file that does not exist succeeds.
    ///
    /// Returns `false` only for a delete that found nothing to remove.
    pub fn flush(&self, root: &Path) -> Result<bool> {
        let target = root.join(self.path());
        match self {
            TemplateArtifact::Write { .. } => {
                if let Some(dir) = target.parent()
                    && !dir.as_os_str().is_empty()
                {
                    fs::create_dir_all(dir).map_err(|e| CpmError::io("create directory", dir, e))?;
                }
                let text = self.contents().unwrap_or_default();
                fs::write(&target, text).map_err(|e| CpmError::io("write", &target, e))?;
                Ok(true)
            }
            TemplateArtifact::Delete { .. } => match fs::remove_file(&target) {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
                Err(e) => Err(CpmError::io("delete", &target, e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let artifact = TemplateArtifact::write("include/net/socket.h", ["#pragma once"]);
        assert!(artifact.flush(dir.path()).unwrap());

        let text = fs::read_to_string(dir.path().join("include/net/socket.h")).unwrap();
        assert_eq!(text, "#pragma once\n");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.h"), "old contents\n").unwrap();
        TemplateArtifact::write("a.h", ["new"]).flush(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.h")).unwrap(), "new\n");
    }

    #[test]
    fn test_delete_missing_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let removed = TemplateArtifact::delete("src/ghost.cpp")
            .flush(dir.path())
            .unwrap();
        assert!(!removed);
    }

    #[test]
    fn test_delete_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gone.c"), "").unwrap();
        assert!(TemplateArtifact::delete("gone.c").flush(dir.path()).unwrap());
        assert!(!dir.path().join("gone.c").exists());
    }
}
