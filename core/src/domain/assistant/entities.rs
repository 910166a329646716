use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::entities::HistoricalEntry,
    meal_input::{MealInput, MealInputSnapshot},
    nutrition::entities::NutritionResponse,
};

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze meal. Please check your input and try again.";

/// The result on display, together with the history entry backing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayedResult {
    pub entry_id: i64,
    pub nutrition: NutritionResponse,
}

/// Mutable session state guarded by the assistant.
///
/// `loading` is the single in-flight guard: it is checked and set under the
/// same lock, so at most one analysis runs at a time.
#[derive(Debug, Default)]
pub struct SessionState {
    pub input: MealInput,
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<DisplayedResult>,
}

impl SessionState {
    pub fn ensure_idle(&self) -> Result<(), CoreError> {
        if self.loading {
            return Err(CoreError::AnalysisInFlight);
        }
        Ok(())
    }

    pub fn begin_analysis(&mut self) {
        self.loading = true;
        self.current = None;
        self.error = None;
        self.input.set_disabled(true);
    }

    pub fn finish_with_result(&mut self, entry: &HistoricalEntry) {
        self.current = Some(DisplayedResult {
            entry_id: entry.id,
            nutrition: entry.nutrition_data.clone(),
        });
        self.error = None;
        self.finish();
    }

    pub fn finish_with_error(&mut self, message: &str) {
        self.current = None;
        self.error = Some(message.to_string());
        self.finish();
    }

    pub fn is_displaying(&self, entry_id: i64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.entry_id == entry_id)
    }

    pub fn snapshot(&self, history: &[HistoricalEntry]) -> SessionSnapshot {
        SessionSnapshot {
            loading: self.loading,
            error: self.error.clone(),
            current: self.current.clone(),
            input: self.input.snapshot(self.error.is_some()),
            history: history.to_vec(),
        }
    }

    fn finish(&mut self) {
        self.loading = false;
        self.input.set_disabled(false);
    }
}

/// Consistent copy of everything the presenters need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<DisplayedResult>,
    pub input: MealInputSnapshot,
    pub history: Vec<HistoricalEntry>,
}
