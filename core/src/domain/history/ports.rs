use std::future::Future;

use crate::domain::history::entities::{HistoricalEntry, PersistenceError};

/// Durable home of the whole history collection.
///
/// The collection is always read and written as a unit.
pub trait HistoryRepository: Send + Sync {
    /// Returns an empty collection when nothing has been stored yet.
    fn load(&self) -> impl Future<Output = Result<Vec<HistoricalEntry>, PersistenceError>> + Send;

    fn save(
        &self,
        entries: &[HistoricalEntry],
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Drops the stored record, e.g. after it failed to parse.
    fn discard(&self) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}
