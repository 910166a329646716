use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::domain::{
    assistant::{
        entities::{ANALYSIS_FAILED_MESSAGE, DisplayedResult, SessionSnapshot, SessionState},
        ports::AssistantService,
    },
    common::{entities::app_errors::CoreError, ports::Clock},
    history::{HistoryStore, entities::meal_description_label, ports::HistoryRepository},
    nutrition::{ports::MealAnalyzer, value_objects::MealImage},
};

/// Wires the input collector, the analyzer and the history store together.
///
/// Locks are always taken in the order session, then history. The analyzer
/// runs with neither lock held.
pub struct Assistant<A, R, C> {
    analyzer: A,
    clock: C,
    session: Mutex<SessionState>,
    history: Mutex<HistoryStore<R>>,
}

impl<A, R, C> Assistant<A, R, C>
where
    A: MealAnalyzer,
    R: HistoryRepository,
    C: Clock,
{
    pub fn new(analyzer: A, history: HistoryStore<R>, clock: C) -> Self {
        Self {
            analyzer,
            clock,
            session: Mutex::new(SessionState::default()),
            history: Mutex::new(history),
        }
    }

    async fn with_session<F>(&self, update: F) -> Result<SessionSnapshot, CoreError>
    where
        F: FnOnce(&mut SessionState) -> Result<(), CoreError> + Send,
    {
        let mut session = self.session.lock().await;
        update(&mut session)?;
        let history = self.history.lock().await;
        Ok(session.snapshot(history.entries()))
    }
}

impl<A, R, C> AssistantService for Assistant<A, R, C>
where
    A: MealAnalyzer,
    R: HistoryRepository,
    C: Clock,
{
    async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.lock().await;
        let history = self.history.lock().await;
        session.snapshot(history.entries())
    }

    async fn set_description(&self, description: String) -> Result<SessionSnapshot, CoreError> {
        self.with_session(|session| session.input.set_description(description))
            .await
    }

    async fn set_image(&self, image: MealImage) -> Result<SessionSnapshot, CoreError> {
        self.with_session(|session| session.input.set_image(image))
            .await
    }

    async fn remove_image(&self) -> Result<SessionSnapshot, CoreError> {
        self.with_session(|session| session.input.remove_image())
            .await
    }

    #[instrument(skip(self))]
    async fn submit(&self) -> Result<SessionSnapshot, CoreError> {
        let input = {
            let mut session = self.session.lock().await;
            session.ensure_idle()?;
            let input = session.input.submit()?;
            session.begin_analysis();
            input
        };

        let meal_description = meal_description_label(&input.description, input.image.is_some());
        let outcome = self.analyzer.analyze(input).await;

        let mut session = self.session.lock().await;
        let mut history = self.history.lock().await;

        match outcome {
            Ok(nutrition) => {
                let (entry, persisted) = history
                    .record(self.clock.now_millis(), meal_description, nutrition)
                    .await;
                if let Err(e) = persisted {
                    error!("Failed to persist history entry {}: {}", entry.id, e);
                }
                info!(
                    entry_id = entry.id,
                    foods = entry.nutrition_data.foods.len(),
                    "meal analyzed"
                );
                session.finish_with_result(&entry);
            }
            Err(e) => {
                error!("Failed to fetch nutrition data: {}", e);
                session.finish_with_error(ANALYSIS_FAILED_MESSAGE);
            }
        }

        Ok(session.snapshot(history.entries()))
    }

    async fn clear(&self) -> Result<SessionSnapshot, CoreError> {
        self.with_session(|session| {
            session.ensure_idle()?;
            session.input.clear()?;
            session.current = None;
            session.error = None;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn select_history_entry(&self, id: i64) -> Result<SessionSnapshot, CoreError> {
        let mut session = self.session.lock().await;
        session.ensure_idle()?;

        let history = self.history.lock().await;
        let entry = history.get(id).ok_or(CoreError::NotFound)?;

        session.current = Some(DisplayedResult {
            entry_id: entry.id,
            nutrition: entry.nutrition_data.clone(),
        });
        session.error = None;

        Ok(session.snapshot(history.entries()))
    }

    #[instrument(skip(self))]
    async fn delete_history_entry(&self, id: i64) -> Result<SessionSnapshot, CoreError> {
        let mut session = self.session.lock().await;
        session.ensure_idle()?;

        let mut history = self.history.lock().await;
        match history.remove_by_id(id).await {
            Ok(Some(_)) => info!(entry_id = id, "history entry deleted"),
            Ok(None) => {}
            Err(e) => error!("Failed to persist deletion of history entry {}: {}", id, e),
        }

        if session.is_displaying(id) {
            session.current = None;
        }

        Ok(session.snapshot(history.entries()))
    }
}
