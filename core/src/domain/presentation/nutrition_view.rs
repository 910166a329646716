use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    nutrition::entities::{FoodItem, NutritionResponse},
    presentation::Measure,
};

pub const NUTRITION_PLACEHOLDER: &str =
    "No nutrition data to display yet. Describe or upload your meal above!";
pub const NUTRITION_TITLE: &str = "Your Meal's Nutrition";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NutritionView {
    Placeholder { message: String },
    Breakdown(NutritionBreakdown),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionBreakdown {
    pub title: String,
    pub totals: MacroMeasures,
    pub foods: Vec<FoodItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroMeasures {
    pub calories: Measure,
    pub protein: Measure,
    pub carbs: Measure,
    pub fat: Measure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItemView {
    pub name: String,
    pub quantity: String,
    pub amounts: MacroMeasures,
    pub confidence: ConfidenceBadge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Lower bounds are inclusive: 0.8 is high, 0.5 is medium.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence >= 0.5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfidenceBadge {
    pub tier: ConfidenceTier,
    pub value: f64,
    pub label: String,
}

impl ConfidenceBadge {
    pub fn new(confidence: f64) -> Self {
        Self {
            tier: ConfidenceTier::from_confidence(confidence),
            value: confidence,
            label: format!("Confidence: {}%", (confidence * 100.0).round() as i64),
        }
    }
}

fn food_item_view(food: &FoodItem) -> FoodItemView {
    FoodItemView {
        name: food.name.clone(),
        quantity: food.quantity.clone(),
        amounts: MacroMeasures {
            calories: Measure::new(food.calories, "kcal"),
            protein: Measure::new(food.macros.protein, "g"),
            carbs: Measure::new(food.macros.carbs, "g"),
            fat: Measure::new(food.macros.fat, "g"),
        },
        confidence: ConfidenceBadge::new(food.confidence),
    }
}

pub fn render_nutrition(nutrition: Option<&NutritionResponse>) -> NutritionView {
    let Some(nutrition) = nutrition.filter(|n| !n.is_empty()) else {
        return NutritionView::Placeholder {
            message: NUTRITION_PLACEHOLDER.to_string(),
        };
    };

    let totals = nutrition.totals();

    NutritionView::Breakdown(NutritionBreakdown {
        title: NUTRITION_TITLE.to_string(),
        totals: MacroMeasures {
            calories: Measure::new(totals.calories, "kcal"),
            protein: Measure::new(totals.protein, "g"),
            carbs: Measure::new(totals.carbs, "g"),
            fat: Measure::new(totals.fat, "g"),
        },
        foods: nutrition.foods.iter().map(food_item_view).collect(),
    })
}
