use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoricalEntry, PersistenceError},
        ports::HistoryRepository,
    },
    nutrition::entities::NutritionResponse,
};

/// In-memory history mirrored to a [`HistoryRepository`] after every change.
#[derive(Debug)]
pub struct HistoryStore<R> {
    repository: R,
    entries: Vec<HistoricalEntry>,
    /// Largest id ever held, including removed entries.
    high_water: Option<i64>,
}

impl<R> HistoryStore<R>
where
    R: HistoryRepository,
{
    /// Reads the stored collection once. Never fails: a corrupted record is
    /// discarded and any unreadable state starts an empty history.
    pub async fn load(repository: R) -> Self {
        let entries = match repository.load().await {
            Ok(entries) => entries,
            Err(PersistenceError::Corrupted(e)) => {
                warn!("Failed to load history from storage, discarding it: {}", e);
                if let Err(e) = repository.discard().await {
                    warn!("Failed to discard corrupted history: {}", e);
                }
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to load history from storage: {}", e);
                Vec::new()
            }
        };

        debug!(count = entries.len(), "history loaded");

        let high_water = entries.iter().map(|entry| entry.id).max();

        Self {
            repository,
            entries,
            high_water,
        }
    }

    pub fn entries(&self) -> &[HistoricalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&HistoricalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Next unused id: `now` unless an id at or past it was already handed out,
    /// even by an entry removed since.
    pub fn next_id(&self, now: i64) -> i64 {
        match self.high_water {
            Some(max_id) if max_id >= now => max_id + 1,
            _ => now,
        }
    }

    /// Appends the entry and rewrites the stored collection.
    ///
    /// The entry stays in memory even if the write fails.
    pub async fn append(&mut self, entry: HistoricalEntry) -> Result<(), CoreError> {
        if self.get(entry.id).is_some() {
            return Err(CoreError::DuplicateEntry(entry.id));
        }

        self.high_water = self.high_water.max(Some(entry.id));
        self.entries.push(entry);
        self.persist().await?;
        Ok(())
    }

    /// Builds an entry for a fresh analysis result and appends it.
    pub async fn record(
        &mut self,
        now: i64,
        meal_description: String,
        nutrition_data: NutritionResponse,
    ) -> (HistoricalEntry, Result<(), CoreError>) {
        let entry = HistoricalEntry::new(self.next_id(now), now, meal_description, nutrition_data);
        let outcome = self.append(entry.clone()).await;
        (entry, outcome)
    }

    /// Removes the entry with `id`. Absent ids are a no-op and write nothing.
    pub async fn remove_by_id(
        &mut self,
        id: i64,
    ) -> Result<Option<HistoricalEntry>, PersistenceError> {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };

        let removed = self.entries.remove(position);
        self.persist().await?;
        Ok(Some(removed))
    }

    async fn persist(&self) -> Result<(), PersistenceError> {
        self.repository.save(&self.entries).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::nutrition::entities::{FoodItem, MacroNutrients};

    /// Key-value style fake: one raw JSON document, like a browser storage slot.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryHistoryRepository {
        pub raw: Arc<Mutex<Option<String>>>,
        pub saves: Arc<Mutex<usize>>,
        pub fail_writes: bool,
    }

    impl MemoryHistoryRepository {
        pub(crate) fn with_raw(raw: &str) -> Self {
            Self {
                raw: Arc::new(Mutex::new(Some(raw.to_string()))),
                ..Default::default()
            }
        }

        pub(crate) fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl HistoryRepository for MemoryHistoryRepository {
        async fn load(&self) -> Result<Vec<HistoricalEntry>, PersistenceError> {
            match self.raw.lock().unwrap().as_deref() {
                None => Ok(Vec::new()),
                Some(raw) => serde_json::from_str(raw).map_err(PersistenceError::Corrupted),
            }
        }

        async fn save(&self, entries: &[HistoricalEntry]) -> Result<(), PersistenceError> {
            *self.saves.lock().unwrap() += 1;
            if self.fail_writes {
                return Err(PersistenceError::Write(std::io::Error::other("disk full")));
            }
            let raw = serde_json::to_string(entries).map_err(PersistenceError::Encode)?;
            *self.raw.lock().unwrap() = Some(raw);
            Ok(())
        }

        async fn discard(&self) -> Result<(), PersistenceError> {
            *self.raw.lock().unwrap() = None;
            Ok(())
        }
    }

    pub(crate) fn meal(name: &str, calories: f64) -> NutritionResponse {
        NutritionResponse::new(vec![FoodItem::new(
            name,
            "1 serving",
            calories,
            MacroNutrients::new(1.0, 2.0, 3.0),
            0.8,
        )])
    }

    #[tokio::test]
    async fn test_load_without_record_is_empty() {
        let store = HistoryStore::load(MemoryHistoryRepository::default()).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_corrupted_record_loads_empty_and_is_discarded() {
        let repository = MemoryHistoryRepository::with_raw("{not json");

        let store = HistoryStore::load(repository.clone()).await;

        assert!(store.is_empty());
        assert!(repository.raw.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_then_reload_round_trips() {
        for n in [0_i64, 1, 5] {
            let repository = MemoryHistoryRepository::default();
            let mut store = HistoryStore::load(repository.clone()).await;

            for i in 0..n {
                let entry = HistoricalEntry::new(i, 1_000 + i, format!("meal {i}"), meal("rice", 200.0));
                store.append(entry).await.unwrap();
            }

            let reloaded = HistoryStore::load(repository.clone()).await;
            assert_eq!(reloaded.entries(), store.entries());
            assert_eq!(reloaded.len() as i64, n);
        }
    }

    #[tokio::test]
    async fn test_every_append_rewrites_whole_collection() {
        let repository = MemoryHistoryRepository::default();
        let mut store = HistoryStore::load(repository.clone()).await;

        store
            .append(HistoricalEntry::new(1, 1, "a".into(), meal("egg", 70.0)))
            .await
            .unwrap();
        store
            .append(HistoricalEntry::new(2, 2, "b".into(), meal("toast", 80.0)))
            .await
            .unwrap();

        assert_eq!(repository.save_count(), 2);
        let stored: Vec<HistoricalEntry> =
            serde_json::from_str(repository.raw.lock().unwrap().as_deref().unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let mut store = HistoryStore::load(MemoryHistoryRepository::default()).await;
        store
            .append(HistoricalEntry::new(1, 1, "a".into(), meal("egg", 70.0)))
            .await
            .unwrap();

        let err = store
            .append(HistoricalEntry::new(1, 2, "b".into(), meal("egg", 70.0)))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateEntry(1)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_by_id_leaves_others_untouched() {
        let repository = MemoryHistoryRepository::default();
        let mut store = HistoryStore::load(repository.clone()).await;
        let first = HistoricalEntry::new(1, 10, "a".into(), meal("egg", 70.0));
        let second = HistoricalEntry::new(2, 20, "b".into(), meal("egg", 70.0));
        let third = HistoricalEntry::new(3, 30, "c".into(), meal("soup", 150.0));
        for entry in [first.clone(), second.clone(), third.clone()] {
            store.append(entry).await.unwrap();
        }

        let removed = store.remove_by_id(2).await.unwrap();

        assert_eq!(removed, Some(second));
        assert_eq!(store.entries(), &[first, third]);
        let reloaded = HistoryStore::load(repository).await;
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_writes_nothing() {
        let repository = MemoryHistoryRepository::default();
        let mut store = HistoryStore::load(repository.clone()).await;
        store
            .append(HistoricalEntry::new(1, 1, "a".into(), meal("egg", 70.0)))
            .await
            .unwrap();

        let removed = store.remove_by_id(42).await.unwrap();

        assert!(removed.is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(repository.save_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_state() {
        let repository = MemoryHistoryRepository {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = HistoryStore::load(repository).await;

        let err = store
            .append(HistoricalEntry::new(1, 1, "a".into(), meal("egg", 70.0)))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Persistence(PersistenceError::Write(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_next_id_never_reuses() {
        let mut store = HistoryStore::load(MemoryHistoryRepository::default()).await;
        assert_eq!(store.next_id(500), 500);

        let (first, outcome) = store.record(500, "a".into(), meal("egg", 70.0)).await;
        outcome.unwrap();
        let (second, outcome) = store.record(500, "b".into(), meal("egg", 70.0)).await;
        outcome.unwrap();
        let (third, outcome) = store.record(400, "c".into(), meal("egg", 70.0)).await;
        outcome.unwrap();

        assert_eq!(first.id, 500);
        assert_eq!(second.id, 501);
        assert_eq!(third.id, 502);
        assert_eq!(third.timestamp, 400);
    }

    #[tokio::test]
    async fn test_removed_newest_id_is_not_handed_out_again() {
        let mut store = HistoryStore::load(MemoryHistoryRepository::default()).await;

        let (first, _) = store.record(500, "a".into(), meal("egg", 70.0)).await;
        let (second, _) = store.record(500, "b".into(), meal("egg", 70.0)).await;
        store.remove_by_id(second.id).await.unwrap();
        let (third, outcome) = store.record(500, "c".into(), meal("egg", 70.0)).await;
        outcome.unwrap();

        assert_eq!(first.id, 500);
        assert_eq!(second.id, 501);
        assert_eq!(third.id, 502);
    }

    #[tokio::test]
    async fn test_loaded_ids_raise_next_id() {
        let repository = MemoryHistoryRepository::default();
        let mut store = HistoryStore::load(repository.clone()).await;
        store
            .append(HistoricalEntry::new(900, 900, "a".into(), meal("egg", 70.0)))
            .await
            .unwrap();

        let reloaded = HistoryStore::load(repository).await;

        assert_eq!(reloaded.next_id(100), 901);
        assert_eq!(reloaded.next_id(2_000), 2_000);
    }
}
