use crate::{Error, LocalStorage};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;

///
/// Storage that keeps all slots in a single JSON object on disk.
///
/// The file is rewritten on every change. New content is written
/// to a temporary file first and then renamed over the old one.
///
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    ///
    /// Opens storage file. Missing file is treated as empty storage
    /// and will be created on the first write.
    ///
    /// ### Errors
    /// - [Error::Io] when file exists but cannot be read
    /// - [Error::Serialization] when file content is not a JSON object of strings
    ///
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        let items = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<HashMap<String, String>>(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(Error::Io(err)),
        };
        tracing::debug!(path = %path.display(), count = items.len(), "opened storage");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, items: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(items)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::trace!(path = %self.path.display(), "persisted storage");

        Ok(())
    }
}

#[async_trait]
impl LocalStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self.items.lock().await;

        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), Error> {
        let mut items = self.items.lock().await;

        let mut updated = items.clone();
        updated.insert(key.to_string(), value);
        self.persist(&updated).await?;
        *items = updated;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.items.lock().await;
        if !items.contains_key(key) {
            return Ok(());
        }

        let mut updated = items.clone();
        updated.remove(key);
        self.persist(&updated).await?;
        *items = updated;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn open_file_not_exist() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();

        assert!(storage.get_item("any").await.unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[tokio::test]
    async fn open_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, b"this is not json").await.unwrap();

        let result = FileStorage::open(&path).await;

        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn set_item_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        {
            let storage = FileStorage::open(&path).await.unwrap();
            storage
                .set_item("tickets_1", "[]".to_string())
                .await
                .unwrap();
        }

        let storage = FileStorage::open(&path).await.unwrap();
        let value = storage.get_item("tickets_1").await.unwrap();

        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn remove_item_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let storage = FileStorage::open(&path).await.unwrap();
            storage.set_item("a", "1".to_string()).await.unwrap();
            storage.set_item("b", "2".to_string()).await.unwrap();
            storage.remove_item("a").await.unwrap();
        }

        let storage = FileStorage::open(&path).await.unwrap();

        assert!(storage.get_item("a").await.unwrap().is_none());
        assert_eq!(storage.get_item("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn remove_item_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();

        storage.remove_item("missing").await.unwrap();

        assert!(!storage.path().exists());
    }
}
