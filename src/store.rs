//! The project store (`cpm.toml`).
//!
//! A flat table of string keys to string values, read once at startup and
//! written back after a successful mutating command:
//!
//! ```toml
//! language = "cpp"
//! name = "demo"
//! standard = "23"
//! structure = "executable"
//! ```

use crate::error::{CpmError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_FILE: &str = "cpm.toml";

/// Scalars a hand-edited `cpm.toml` may hold. Everything is kept as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl StoredValue {
    fn into_text(self) -> String {
        match self {
            StoredValue::Text(s) => s,
            StoredValue::Integer(n) => n.to_string(),
            StoredValue::Float(n) => n.to_string(),
            StoredValue::Boolean(b) => b.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl ProjectStore {
    /// An empty store bound to `<root>/cpm.toml`, without touching the disk.
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(STORE_FILE),
            entries: BTreeMap::new(),
        }
    }

    /// Loads `<root>/cpm.toml`. A missing file yields an empty store.
    pub fn read(root: &Path) -> Result<Self> {
        let mut store = Self::new(root);
        if store.path.exists() {
            let content = fs::read_to_string(&store.path)
                .map_err(|e| CpmError::io("read", &store.path, e))?;
            let raw: BTreeMap<String, StoredValue> =
                toml::from_str(&content).map_err(|source| CpmError::MalformedStore {
                    path: store.path.clone(),
                    source,
                })?;
            store.entries = raw.into_iter().map(|(k, v)| (k, v.into_text())).collect();
        }
        Ok(store)
    }

    pub fn write(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.entries).map_err(CpmError::StoreEncoding)?;
        fs::write(&self.path, content).map_err(|e| CpmError::io("write", &self.path, e))
    }

    /// Whether the backing file exists, i.e. the directory has been initialised.
    pub fn exists_on_disk(&self) -> bool {
        self.path.exists()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes `key`, returning whether it was present.
    pub fn erase(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = ProjectStore::read(dir.path()).unwrap();
        assert!(!store.exists_on_disk());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let mut store = ProjectStore::new(dir.path());
        store.set("language", "cpp");
        store.set("structure", "simple");
        store.write().unwrap();

        let reloaded = ProjectStore::read(dir.path()).unwrap();
        assert!(reloaded.exists_on_disk());
        assert_eq!(reloaded.get("language"), Some("cpp"));
        assert_eq!(reloaded.get("structure"), Some("simple"));
    }

    #[test]
    fn test_erase() {
        let dir = TempDir::new().unwrap();
        let mut store = ProjectStore::new(dir.path());
        store.set("editor", "vim");
        assert!(store.erase("editor"));
        assert!(!store.erase("editor"));
        assert!(!store.has_key("editor"));
    }

    #[test]
    fn test_parse_flat_table() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(STORE_FILE),
            "language = \"c\"\nstructure = \"executable\"\n",
        )
        .unwrap();
        let store = ProjectStore::read(dir.path()).unwrap();
        assert_eq!(store.get("language"), Some("c"));
    }

    #[test]
    fn test_hand_edited_scalars_become_text() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(STORE_FILE),
            "language = \"cpp\"\nstandard = 17\nverbose = true\n",
        )
        .unwrap();
        let store = ProjectStore::read(dir.path()).unwrap();
        assert_eq!(store.get("standard"), Some("17"));
        assert_eq!(store.get("verbose"), Some("true"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILE), "language = [1, 2]\n").unwrap();
        let err = ProjectStore::read(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            CpmError::MalformedStore { ref path, .. } if path.ends_with(STORE_FILE)
        ));
        assert!(err.to_string().starts_with("malformed project store"));
    }
}
