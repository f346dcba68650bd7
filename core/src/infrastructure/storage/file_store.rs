use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Stores each key as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoreError::StorageError(format!("invalid storage key: {key:?}")));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    error!("Failed to {} {}: {}", action, path.display(), e);
    CoreError::StorageError(format!("failed to {action} {}: {e}", path.display()))
}

impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| storage_error("create", &self.data_dir, e))?;

        // Write then rename so a crash never leaves a half-written document.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| storage_error("write", &tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(storage_error("replace", &path, e));
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        assert_eq!(store.get("mealmate_prefs_v2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("nested"));

        store
            .set("mealmate_pantry_v2", "[]".to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get("mealmate_pantry_v2").await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("nested/mealmate_pantry_v2.json").exists());

        store
            .set("mealmate_pantry_v2", "[1]".to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get("mealmate_pantry_v2").await.unwrap().as_deref(),
            Some("[1]")
        );

        store.remove("mealmate_pantry_v2").await.unwrap();
        assert_eq!(store.get("mealmate_pantry_v2").await.unwrap(), None);
        store.remove("mealmate_pantry_v2").await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_replace_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in the target's place makes the rename fail.
        std::fs::create_dir(dir.path().join("mealmate_plan_v2.json")).unwrap();
        let store = FileKeyValueStore::new(dir.path());

        let result = store.set("mealmate_plan_v2", "{}".to_string()).await;
        assert!(matches!(result, Err(CoreError::StorageError(_))));
        assert!(!dir.path().join("mealmate_plan_v2.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x".to_string()).await,
            Err(CoreError::StorageError(_))
        ));
        assert!(store.get("").await.is_err());
    }
}
