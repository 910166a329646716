use thiserror::Error;

use crate::domain::{history::entities::PersistenceError, nutrition::entities::AnalysisError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("an analysis is already in flight")]
    AnalysisInFlight,

    #[error("input is disabled while an analysis is in flight")]
    InputDisabled,

    #[error("Not found")]
    NotFound,

    #[error("history entry {0} already exists")]
    DuplicateEntry(i64),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
