//! # cpm - C/C++ Project Scaffolder
//!
//! cpm creates project layouts, CMake descriptors and header/source pairs,
//! and records the project's language and structure in `cpm.toml`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a project in the current directory
//! cpm create cpp -name=demo -structure=executable
//!
//! # Add a file pair and a class deriving from it
//! cpm fpair create core/base
//! cpm class game/player -p=core/base
//! ```
//!
//! ## Module Organization
//!
//! - [`paths`] - Header/source path resolution and relative includes
//! - [`scaffold`] - File-pair and class/struct content generation
//! - [`store`] - The `cpm.toml` key-value store
//! - [`commands`] - CLI command handlers

/// CLI command handlers.
pub mod commands;

/// Typed view over the project store (language, structure, layout).
pub mod config;

/// Error kinds surfaced to the user.
pub mod error;

/// `-flag` / `-key=value` token parsing.
pub mod flags;

/// Access-section model of C++ headers.
pub mod header;

/// Counted, colour-tagged console output.
pub mod logger;

/// Path resolution for file pairs and parent headers.
pub mod paths;

/// File-pair, class and struct generation.
pub mod scaffold;

/// The `cpm.toml` store.
pub mod store;

/// Project templates (CMakeLists, main, git files).
pub mod templates;

/// Shell access and cmake detection.
pub mod toolchain;

/// Terminal UI utilities (tables, prompts).
pub mod ui;
