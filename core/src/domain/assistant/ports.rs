use std::future::Future;

use crate::domain::{
    assistant::entities::SessionSnapshot, common::entities::app_errors::CoreError,
    nutrition::value_objects::MealImage,
};

/// Service trait driving one assistant session.
///
/// Every mutating call returns the snapshot taken right after the change.
pub trait AssistantService: Send + Sync {
    fn snapshot(&self) -> impl Future<Output = SessionSnapshot> + Send;

    fn set_description(
        &self,
        description: String,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn set_image(
        &self,
        image: MealImage,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn remove_image(&self) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    /// Analyzes the current input. Analysis failures are reported through the
    /// snapshot's `error`, not as `Err`.
    fn submit(&self) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    /// Resets the input, the displayed result and the error. History is untouched.
    fn clear(&self) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn select_history_entry(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn delete_history_entry(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;
}
