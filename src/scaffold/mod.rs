//! Header/source pair generation.
//!
//! - [`pair`] - plain pairs and best-effort removal
//! - [`types`] - class and struct pairs (plain, singleton, interface, inheritance)
//! - [`artifact`] - the write/delete unit every generator flushes through
//!
//! Batches are not transactional: each name is written completely before the
//! next one starts, and a failure leaves earlier names on disk.

pub mod artifact;
pub mod pair;
pub mod types;

pub use artifact::TemplateArtifact;
pub use pair::{PairContent, create_pair, remove_pair, write_pair};
pub use types::{ClassVariant, GeneratedPair, ParentSpec, generate_class, generate_struct};

use std::path::Path;

/// Uppercases the first character and leaves the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Type name for a logical pair name: the capitalized final path segment.
pub fn type_name(name: &str) -> String {
    let segment = Path::new(name)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    capitalize(&segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("Foo"), "Foo");
        assert_eq!(capitalize("fooBar"), "FooBar");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_is_idempotent() {
        for word in ["engine", "Engine", "x", "_private", "9lives"] {
            let once = capitalize(word);
            assert_eq!(capitalize(&once), once);
        }
    }

    #[test]
    fn test_type_name_uses_last_segment() {
        assert_eq!(type_name("net/socket"), "Socket");
        assert_eq!(type_name("widget"), "Widget");
        assert_eq!(type_name("shapes/circle/"), "Circle");
    }
}
