//! Pure rendering of nutrition results and history into display-ready view models.

pub mod history_view;
pub mod nutrition_view;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use history_view::*;
pub use nutrition_view::*;

/// A raw amount next to its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Measure {
    pub value: f64,
    pub label: String,
}

impl Measure {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            label: format!("{} {unit}", format_amount(value)),
        }
    }
}

/// Formats an amount with at most two decimals and no trailing zeros.
pub fn format_amount(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
