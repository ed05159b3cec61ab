use std::{fs, path::PathBuf};

use crate::{
    errors::Result,
    utils::persistence::{read_if_exists, remove_if_exists, write_atomic},
};

use super::SnapshotStore;

const ENTRY_EXTENSION: &str = "json";

/// Filesystem-backed store: one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), ENTRY_EXTENSION))
    }
}

impl SnapshotStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_if_exists(&self.entry_path(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.entry_path(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        remove_if_exists(&self.entry_path(key))
    }
}

/// Maps a key onto a safe file stem.
fn canonical_key(key: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in key.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_') {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "entry".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn canonical_key_is_filesystem_safe() {
        assert_eq!(canonical_key("career_wizard.answers"), "career_wizard.answers");
        assert_eq!(canonical_key("  My Answers / v2 "), "my-answers-v2");
        assert_eq!(canonical_key("///"), "entry");
    }

    #[test]
    fn set_get_remove_cycle() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage")).unwrap();
        assert_eq!(store.get("answers").unwrap(), None);

        store.set("answers", r#"{"mbti":"INTJ"}"#).unwrap();
        assert_eq!(store.get("answers").unwrap().as_deref(), Some(r#"{"mbti":"INTJ"}"#));
        assert!(store.entry_path("answers").exists());

        store.remove("answers").unwrap();
        assert_eq!(store.get("answers").unwrap(), None);
        store.remove("answers").unwrap();
    }
}
