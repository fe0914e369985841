//! Typed view over the project store.
//!
//! The store holds plain strings; this module turns `language` and
//! `structure` into [`Language`], [`Structure`] and the [`Layout`] they imply,
//! and validates values before `cpm config set` records them.

use crate::error::{CpmError, Result};
use crate::store::ProjectStore;
use std::fmt;
use std::str::FromStr;

pub const KEY_LANGUAGE: &str = "language";
pub const KEY_STRUCTURE: &str = "structure";
pub const KEY_DEFAULT_STRUCTURE: &str = "default_structure";
pub const KEY_NAME: &str = "name";
pub const KEY_STANDARD: &str = "standard";

pub const DEFAULT_STANDARD: &str = "23";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    pub fn source_extension(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    pub fn header_extension(use_hpp: bool) -> &'static str {
        if use_hpp { "hpp" } else { "h" }
    }

    /// Language name as CMake spells it in `LANGUAGES` and `CMAKE_<LANG>_STANDARD`.
    pub fn cmake_name(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "CXX",
        }
    }
}

impl FromStr for Language {
    type Err = CpmError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "c" => Ok(Language::C),
            "cpp" | "c++" => Ok(Language::Cpp),
            other => Err(CpmError::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory layout conventions a project can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// CMake tree: `include/`, `src/`, `build/`, `tests/`.
    Executable,
    /// Everything at the project root.
    Simple,
}

impl Structure {
    pub const ALL: [Structure; 2] = [Structure::Executable, Structure::Simple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Executable => "executable",
            Structure::Simple => "simple",
        }
    }
}

impl FromStr for Structure {
    type Err = CpmError;

    fn from_str(s: &str) -> Result<Self> {
        Structure::ALL
            .into_iter()
            .find(|structure| structure.as_str() == s)
            .ok_or_else(|| CpmError::UnsupportedTemplate(s.to_string()))
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where headers and sources live relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Headers under `include/`, sources under `src/`.
    Prefixed,
    /// Headers and sources side by side at the root.
    Flat,
}

impl Layout {
    /// Only `simple` is flat; every other recorded structure name is prefixed.
    pub fn for_structure(name: &str) -> Self {
        if name == Structure::Simple.as_str() {
            Layout::Flat
        } else {
            Layout::Prefixed
        }
    }
}

/// Typed view over the store keys that file-pair operations depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub language: Language,
    pub structure: String,
    pub layout: Layout,
}

impl ProjectConfig {
    pub fn new(language: Language, structure: &str) -> Self {
        Self {
            language,
            structure: structure.to_string(),
            layout: Layout::for_structure(structure),
        }
    }

    pub fn from_store(store: &ProjectStore) -> Result<Self> {
        let language = store
            .get(KEY_LANGUAGE)
            .ok_or_else(|| CpmError::MissingProjectState(KEY_LANGUAGE.to_string()))?;
        let structure = store
            .get(KEY_STRUCTURE)
            .ok_or_else(|| CpmError::MissingProjectState(KEY_STRUCTURE.to_string()))?;

        let language = language
            .parse::<Language>()
            .map_err(|_| CpmError::UnsupportedLanguage(language.to_string()))?;

        Ok(Self::new(language, structure))
    }
}

/// Validates a `config set` before it reaches the store.
/// Keys the core interprets are checked; anything else is free-form.
pub fn validate_entry(key: &str, value: &str) -> Result<()> {
    match key {
        KEY_LANGUAGE => value.parse::<Language>().map(|_| ()),
        KEY_STRUCTURE | KEY_DEFAULT_STRUCTURE => value.parse::<Structure>().map(|_| ()),
        KEY_STANDARD => validate_standard(value),
        _ => Ok(()),
    }
}

pub fn validate_standard(value: &str) -> Result<()> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CpmError::InvalidValue {
            key: KEY_STANDARD.to_string(),
            value: value.to_string(),
        })
    }
}
