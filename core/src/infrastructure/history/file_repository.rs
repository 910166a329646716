use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::{debug, error};

use crate::domain::history::{
    entities::{HistoricalEntry, PersistenceError},
    ports::HistoryRepository,
};

/// Keeps the whole history as one JSON array in a single file.
///
/// Saves go through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous collection in place.
#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<Vec<HistoricalEntry>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored history");
                return Ok(Vec::new());
            }
            Err(e) => return Err(PersistenceError::Read(e)),
        };

        serde_json::from_str(&raw).map_err(PersistenceError::Corrupted)
    }

    async fn save(&self, entries: &[HistoricalEntry]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(entries).map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(PersistenceError::Write)?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, raw).await.map_err(|e| {
            error!("Failed to write history to {}: {}", temp_path.display(), e);
            PersistenceError::Write(e)
        })?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(PersistenceError::Write)?;

        debug!(count = entries.len(), path = %self.path.display(), "history saved");
        Ok(())
    }

    async fn discard(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Write(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{
        history::HistoryStore,
        nutrition::entities::{FoodItem, MacroNutrients, NutritionResponse},
    };

    fn repository(dir: &TempDir) -> FileHistoryRepository {
        FileHistoryRepository::new(dir.path().join("nested").join("history.json"))
    }

    fn entry(id: i64) -> HistoricalEntry {
        HistoricalEntry::new(
            id,
            id * 10,
            format!("meal {id}"),
            NutritionResponse::new(vec![FoodItem::new(
                "toast",
                "2 slices",
                160.0,
                MacroNutrients::new(6.0, 28.0, 2.0),
                0.75,
            )]),
        )
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(repository(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);
        let entries = vec![entry(1), entry(2), entry(3)];

        repository.save(&entries).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), entries);
        assert!(!repository.temp_path().exists());
    }

    #[tokio::test]
    async fn test_file_uses_camel_case_array_layout() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        repository.save(&[entry(5)]).await.unwrap();

        let raw = std::fs::read_to_string(repository.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 5);
        assert_eq!(value[0]["mealDescription"], "meal 5");
        assert_eq!(value[0]["nutritionData"]["foods"][0]["name"], "toast");
    }

    #[tokio::test]
    async fn test_corrupted_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileHistoryRepository::new(&path).load().await.unwrap_err();

        assert!(matches!(err, PersistenceError::Corrupted(_)));
    }

    #[tokio::test]
    async fn test_store_discards_corrupted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = HistoryStore::load(FileHistoryRepository::new(&path)).await;

        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_discard_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        repository(&dir).discard().await.unwrap();
    }
}
