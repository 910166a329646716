use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::value_objects::{AnalyzeMealInput, MealImage, MealImageSummary},
};

pub const INPUT_ERROR_HINT: &str = "An error occurred. Please try again or simplify your request.";

/// Transient user input: the meal description and an optional image.
///
/// Every operation is rejected while `disabled` is set. The flag is owned by
/// whoever drives the analysis, not by the collector itself.
#[derive(Debug, Clone, Default)]
pub struct MealInput {
    description: String,
    image: Option<MealImage>,
    disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealInputSnapshot {
    pub description: String,
    pub image: Option<MealImageSummary>,
    pub disabled: bool,
    /// Shown under the input while the last analysis failed.
    pub error_hint: Option<String>,
}

impl MealInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&MealImage> {
        self.image.as_ref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_enabled()?;
        self.description = description.into();
        Ok(())
    }

    pub fn set_image(&mut self, image: MealImage) -> Result<(), CoreError> {
        self.ensure_enabled()?;
        self.image = Some(image);
        Ok(())
    }

    pub fn remove_image(&mut self) -> Result<(), CoreError> {
        self.ensure_enabled()?;
        self.image = None;
        Ok(())
    }

    /// Hands the current fields over unchanged; the input itself is kept.
    pub fn submit(&self) -> Result<AnalyzeMealInput, CoreError> {
        self.ensure_enabled()?;
        Ok(AnalyzeMealInput {
            description: self.description.clone(),
            image: self.image.clone(),
        })
    }

    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.ensure_enabled()?;
        self.description.clear();
        self.image = None;
        Ok(())
    }

    pub fn snapshot(&self, has_error: bool) -> MealInputSnapshot {
        MealInputSnapshot {
            description: self.description.clone(),
            image: self.image.as_ref().map(MealImage::summary),
            disabled: self.disabled,
            error_hint: has_error.then(|| INPUT_ERROR_HINT.to_string()),
        }
    }

    fn ensure_enabled(&self) -> Result<(), CoreError> {
        if self.disabled {
            return Err(CoreError::InputDisabled);
        }
        Ok(())
    }
}
