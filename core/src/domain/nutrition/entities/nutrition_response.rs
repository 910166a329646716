use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::nutrition::entities::FoodItem;

/// Structured breakdown of one meal as returned by the analysis service.
///
/// `foods` keeps the service's emission order. The order only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct NutritionResponse {
    #[validate(nested)]
    pub foods: Vec<FoodItem>,
}

/// Arithmetic sums over every food of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionResponse {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(|food| food.calories).sum()
    }

    pub fn totals(&self) -> NutritionTotals {
        self.foods
            .iter()
            .fold(NutritionTotals::default(), |acc, food| NutritionTotals {
                calories: acc.calories + food.calories,
                protein: acc.protein + food.macros.protein,
                carbs: acc.carbs + food.macros.carbs,
                fat: acc.fat + food.macros.fat,
            })
    }
}
