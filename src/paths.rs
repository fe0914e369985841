//! Path resolution for header/source pairs.
//!
//! A logical name such as `net/socket` maps to concrete files depending on the
//! project layout and language:
//!
//! | layout   | header                 | source             |
//! |----------|------------------------|--------------------|
//! | prefixed | `include/net/socket.h` | `src/net/socket.cpp` |
//! | flat     | `net/socket.h`         | `net/socket.cpp`   |
//!
//! All returned paths are relative to the project root unless stated otherwise.

use crate::config::{Language, Layout, ProjectConfig};
use crate::error::{CpmError, Result};
use std::path::{Component, Path, PathBuf};

pub const INCLUDE_DIR: &str = "include";
pub const SOURCE_DIR: &str = "src";

const HEADER_EXTENSIONS: [&str; 2] = ["h", "hpp"];
const SOURCE_EXTENSIONS: [&str; 2] = ["c", "cpp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub header: PathBuf,
    pub source: PathBuf,
}

/// Rejects names that would escape the project root once joined onto it:
/// absolute paths and, on Windows, drive or UNC prefixes.
pub fn validate_name(key: &str, name: &str) -> Result<()> {
    let rooted = Path::new(name)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
    if rooted {
        return Err(CpmError::InvalidValue {
            key: key.to_string(),
            value: name.to_string(),
        });
    }
    Ok(())
}

pub fn resolve(name: &str, use_hpp: bool, config: &ProjectConfig) -> ResolvedPaths {
    ResolvedPaths {
        header: header_path(name, use_hpp, config.layout),
        source: source_path(name, config.language, config.layout),
    }
}

pub fn header_path(name: &str, use_hpp: bool, layout: Layout) -> PathBuf {
    with_prefix(
        layout,
        INCLUDE_DIR,
        format!("{name}.{}", Language::header_extension(use_hpp)),
    )
}

pub fn source_path(name: &str, language: Language, layout: Layout) -> PathBuf {
    with_prefix(
        layout,
        SOURCE_DIR,
        format!("{name}.{}", language.source_extension()),
    )
}

fn with_prefix(layout: Layout, prefix: &str, file: String) -> PathBuf {
    match layout {
        Layout::Prefixed => Path::new(prefix).join(file),
        Layout::Flat => PathBuf::from(file),
    }
}

/// Every location a pair called `name` could occupy, under both layouts and
/// all extensions. Used by best-effort removal.
pub fn removal_candidates(name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(8);
    for layout in [Layout::Prefixed, Layout::Flat] {
        for ext in HEADER_EXTENSIONS {
            candidates.push(with_prefix(layout, INCLUDE_DIR, format!("{name}.{ext}")));
        }
        for ext in SOURCE_EXTENSIONS {
            candidates.push(with_prefix(layout, SOURCE_DIR, format!("{name}.{ext}")));
        }
    }
    candidates
}

/// Include path written into a generated source for its own header.
///
/// When header and source sit in the same directory the bare file name is
/// used; otherwise the name fragment relative to the include root.
pub fn source_include(paths: &ResolvedPaths, name: &str, use_hpp: bool) -> String {
    let ext = Language::header_extension(use_hpp);
    if paths.header.parent() == paths.source.parent() {
        let stem = Path::new(name)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        format!("{stem}.{ext}")
    } else {
        format!("{name}.{ext}")
    }
}

/// Resolves a parent reference (`shapes/shape`) to an absolute header path.
///
/// The `.h` spelling is preferred; `.hpp` is tried when no `.h` exists.
pub fn resolve_parent(root: &Path, token: &str, layout: Layout) -> Result<PathBuf> {
    validate_name("parent", token)?;

    let h = root.join(header_path(token, false, layout));
    if h.is_file() {
        return Ok(normalize(&h));
    }

    let hpp = root.join(header_path(token, true, layout));
    if hpp.is_file() {
        return Ok(normalize(&hpp));
    }

    Err(CpmError::ParentNotFound(h))
}

/// Relative path from the directory containing `child` to `parent`, suitable
/// for `#include "..."`. Both arguments should be absolute.
///
/// Separators are always `/`. Paths that share no root (different drives on
/// Windows) fall back to the parent's full path.
pub fn relative_include(child: &Path, parent: &Path) -> String {
    let child = normalize(child);
    let parent = normalize(parent);

    let from: Vec<Component> = child
        .parent()
        .map(|dir| dir.components().collect())
        .unwrap_or_default();
    let to: Vec<Component> = parent.components().collect();

    let shared = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let rooted = |c: &Component| matches!(c, Component::Prefix(_) | Component::RootDir);
    if shared == 0 && (from.first().is_some_and(rooted) || to.first().is_some_and(rooted)) {
        return parent.to_string_lossy().into_owned();
    }

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n("..".to_string(), from.len() - shared));
    segments.extend(
        to[shared..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    segments.join("/")
}

/// Lexically removes `.` and folds `..` into the preceding segment.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cpp(structure: &str) -> ProjectConfig {
        ProjectConfig::new(Language::Cpp, structure)
    }

    fn round_trip(child: &str, parent: &str) {
        let child = Path::new(child);
        let parent = Path::new(parent);
        let rel = relative_include(child, parent);
        let joined = normalize(&child.parent().unwrap().join(&rel));
        assert_eq!(joined, normalize(parent), "relative path was {rel}");
    }

    #[test]
    fn test_resolve_executable() {
        let paths = resolve("widget", false, &cpp("executable"));
        assert_eq!(paths.header, Path::new("include/widget.h"));
        assert_eq!(paths.source, Path::new("src/widget.cpp"));
    }

    #[test]
    fn test_resolve_simple() {
        let paths = resolve("net/socket", true, &cpp("simple"));
        assert_eq!(paths.header, Path::new("net/socket.hpp"));
        assert_eq!(paths.source, Path::new("net/socket.cpp"));
    }

    #[test]
    fn test_resolve_c_sources() {
        let config = ProjectConfig::new(Language::C, "executable");
        let paths = resolve("list", false, &config);
        assert_eq!(paths.source, Path::new("src/list.c"));
    }

    #[test]
    fn test_unknown_structure_is_prefixed() {
        let paths = resolve("widget", false, &cpp("library"));
        assert!(paths.header.starts_with("include"));
        assert!(paths.source.starts_with("src"));
    }

    #[test]
    fn test_layout_and_extension_grid() {
        for structure in ["executable", "simple"] {
            for use_hpp in [true, false] {
                for language in [Language::C, Language::Cpp] {
                    let config = ProjectConfig::new(language, structure);
                    let paths = resolve("a/b", use_hpp, &config);
                    let prefixed = structure == "executable";
                    assert_eq!(paths.header.starts_with("include"), prefixed);
                    assert_eq!(paths.source.starts_with("src"), prefixed);

                    let header_ext = paths.header.extension().unwrap();
                    assert_eq!(header_ext == "hpp", use_hpp);
                    let source_ext = paths.source.extension().unwrap();
                    assert_eq!(source_ext == "c", language == Language::C);
                }
            }
        }
    }

    #[test]
    fn test_source_include_prefixed_uses_fragment() {
        let paths = resolve("net/socket", false, &cpp("executable"));
        assert_eq!(source_include(&paths, "net/socket", false), "net/socket.h");
    }

    #[test]
    fn test_source_include_flat_uses_bare_name() {
        let paths = resolve("net/socket", true, &cpp("simple"));
        assert_eq!(source_include(&paths, "net/socket", true), "socket.hpp");
    }

    #[test]
    fn test_removal_candidates() {
        let candidates = removal_candidates("widget");
        assert_eq!(candidates.len(), 8);
        assert!(candidates.contains(&PathBuf::from("include/widget.hpp")));
        assert!(candidates.contains(&PathBuf::from("src/widget.c")));
        assert!(candidates.contains(&PathBuf::from("widget.h")));
        assert!(candidates.contains(&PathBuf::from("widget.cpp")));
    }

    #[test]
    fn test_relative_include_same_directory() {
        assert_eq!(
            relative_include(
                Path::new("/p/include/dog.h"),
                Path::new("/p/include/animal.h")
            ),
            "animal.h"
        );
        round_trip("/p/include/dog.h", "/p/include/animal.h");
    }

    #[test]
    fn test_relative_include_child_nested_deeper() {
        assert_eq!(
            relative_include(
                Path::new("/p/include/pets/dog.h"),
                Path::new("/p/include/animal.h")
            ),
            "../animal.h"
        );
        round_trip("/p/include/pets/dog.h", "/p/include/animal.h");
    }

    #[test]
    fn test_relative_include_parent_nested_deeper() {
        assert_eq!(
            relative_include(
                Path::new("/p/include/dog.h"),
                Path::new("/p/include/base/animal.h")
            ),
            "base/animal.h"
        );
        round_trip("/p/include/dog.h", "/p/include/base/animal.h");
    }

    #[test]
    fn test_relative_include_sibling_subtrees() {
        assert_eq!(
            relative_include(
                Path::new("/p/include/pets/dog.h"),
                Path::new("/p/include/base/kinds/animal.hpp")
            ),
            "../base/kinds/animal.hpp"
        );
        round_trip("/p/include/pets/dog.h", "/p/include/base/kinds/animal.hpp");
    }

    #[test]
    fn test_relative_include_across_top_level() {
        round_trip("/p/include/a/b/c.h", "/q/d.h");
        assert_eq!(
            relative_include(Path::new("/p/include/a/b/c.h"), Path::new("/q/d.h")),
            "../../../../q/d.h"
        );
    }

    #[test]
    fn test_relative_include_ignores_dot_segments() {
        assert_eq!(
            relative_include(
                Path::new("/p/include/./pets/../dog.h"),
                Path::new("/p/include/animal.h")
            ),
            "animal.h"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), Path::new("/a/c"));
        assert_eq!(normalize(Path::new("../x")), Path::new("../x"));
        assert_eq!(normalize(Path::new("a/../../x")), Path::new("../x"));
    }

    #[test]
    fn test_resolve_parent_prefers_h() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("include")).unwrap();
        fs::write(dir.path().join("include/animal.h"), "#pragma once\n").unwrap();
        fs::write(dir.path().join("include/animal.hpp"), "#pragma once\n").unwrap();

        let parent = resolve_parent(dir.path(), "animal", Layout::Prefixed).unwrap();
        assert!(parent.is_absolute());
        assert!(parent.ends_with("include/animal.h"));
    }

    #[test]
    fn test_resolve_parent_falls_back_to_hpp() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("animal.hpp"), "#pragma once\n").unwrap();

        let parent = resolve_parent(dir.path(), "animal", Layout::Flat).unwrap();
        assert!(parent.ends_with("animal.hpp"));
    }

    #[test]
    fn test_resolve_parent_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            resolve_parent(dir.path(), "ghost", Layout::Prefixed),
            Err(CpmError::ParentNotFound(_))
        ));
    }

    #[test]
    fn test_validate_name_rejects_absolute() {
        assert!(validate_name("name", "widget").is_ok());
        assert!(validate_name("name", "net/socket").is_ok());

        let outside = TempDir::new().unwrap();
        let absolute = outside.path().join("widget");
        let err = validate_name("name", &absolute.to_string_lossy()).unwrap_err();
        assert!(matches!(err, CpmError::InvalidValue { key, .. } if key == "name"));
    }

    #[test]
    fn test_resolve_parent_rejects_absolute_token() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("animal.h"), "#pragma once\n").unwrap();

        let token = outside.path().join("animal");
        assert!(matches!(
            resolve_parent(root.path(), &token.to_string_lossy(), Layout::Flat),
            Err(CpmError::InvalidValue { key, .. }) if key == "parent"
        ));
    }
}
