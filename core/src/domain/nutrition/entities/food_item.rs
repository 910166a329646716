use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Protein, carbohydrate and fat mass of a food, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct MacroNutrients {
    #[validate(range(min = 0.0, message = "protein must not be negative"))]
    pub protein: f64,
    #[validate(range(min = 0.0, message = "carbs must not be negative"))]
    pub carbs: f64,
    #[validate(range(min = 0.0, message = "fat must not be negative"))]
    pub fat: f64,
}

impl MacroNutrients {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct FoodItem {
    #[validate(length(min = 1, message = "food name must not be empty"))]
    pub name: String,
    /// Free text magnitude and unit, e.g. "1 cup" or "150 g".
    pub quantity: String,
    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: f64,
    #[validate(nested)]
    pub macros: MacroNutrients,
    #[validate(range(min = 0.0, max = 1.0, message = "confidence must be within [0, 1]"))]
    pub confidence: f64,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        calories: f64,
        macros: MacroNutrients,
        confidence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            calories,
            macros,
            confidence,
        }
    }
}
