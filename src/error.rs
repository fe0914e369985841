//! Error kinds surfaced by cpm commands.
//!
//! Every variant maps to a one-line message; `main` prints it and exits with 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpmError {
    #[error("'{0}' is not a valid command")]
    InvalidCommand(String),

    #[error("'{sub}' is an invalid sub-command of '{command}'")]
    InvalidSubcommand { command: String, sub: String },

    #[error("'{command}' requires at least {required} argument(s), got {given}")]
    NotEnoughArguments {
        command: String,
        required: usize,
        given: usize,
    },

    #[error("'{0}' is not a supported language (expected c or cpp)")]
    InvalidLanguage(String),

    #[error("recorded language '{0}' is not supported (expected c or cpp)")]
    UnsupportedLanguage(String),

    #[error("project state '{0}' is missing (run 'cpm create <language>' first)")]
    MissingProjectState(String),

    #[error("'{0}' is not a supported project structure (expected executable or simple)")]
    UnsupportedTemplate(String),

    #[error("parent header '{}' does not exist", .0.display())]
    ParentNotFound(PathBuf),

    #[error("C programming language does not support classes")]
    ClassesUnsupportedInC,

    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("malformed project store '{}'", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not encode the project store")]
    StoreEncoding(#[source] toml::ser::Error),

    #[error("failed to {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CpmError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CpmError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpmError>;
