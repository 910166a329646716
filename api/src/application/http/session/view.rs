use nutrition_assistant_core::domain::{
    assistant::SessionSnapshot,
    meal_input::MealInputSnapshot,
    presentation::{HistoryPresenter, HistoryView, NutritionView, render_nutrition},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything a client needs to draw the assistant in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionView {
    pub loading: bool,
    pub error: Option<String>,
    pub input: MealInputSnapshot,
    /// History entry backing the displayed result, if any.
    pub selected_entry_id: Option<i64>,
    pub nutrition: NutritionView,
    pub history: HistoryView,
}

impl SessionView {
    pub fn render(snapshot: &SessionSnapshot, presenter: &HistoryPresenter) -> Self {
        let current = snapshot.current.as_ref();

        SessionView {
            loading: snapshot.loading,
            error: snapshot.error.clone(),
            input: snapshot.input.clone(),
            selected_entry_id: current.map(|result| result.entry_id),
            nutrition: render_nutrition(current.map(|result| &result.nutrition)),
            history: presenter.render(&snapshot.history, snapshot.loading),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use nutrition_assistant_core::domain::{
        assistant::DisplayedResult,
        history::HistoricalEntry,
        nutrition::{FoodItem, MacroNutrients, NutritionResponse},
        presentation::{NUTRITION_PLACEHOLDER, NUTRITION_TITLE},
    };

    use super::*;

    fn presenter() -> HistoryPresenter {
        HistoryPresenter::new(FixedOffset::east_opt(0).unwrap())
    }

    fn idle_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            loading: false,
            error: None,
            current: None,
            input: MealInputSnapshot {
                description: String::new(),
                image: None,
                disabled: false,
                error_hint: None,
            },
            history: vec![],
        }
    }

    #[test]
    fn test_idle_session_renders_placeholders() {
        let view = SessionView::render(&idle_snapshot(), &presenter());

        assert!(!view.loading);
        assert_eq!(view.selected_entry_id, None);
        assert_eq!(
            view.nutrition,
            NutritionView::Placeholder {
                message: NUTRITION_PLACEHOLDER.to_string()
            }
        );
        assert!(matches!(view.history, HistoryView::Empty { .. }));
    }

    #[test]
    fn test_displayed_result_is_rendered() {
        let nutrition = NutritionResponse::new(vec![FoodItem::new(
            "Apple",
            "1 medium",
            95.0,
            MacroNutrients::new(0.5, 25.0, 0.3),
            0.9,
        )]);
        let entry = HistoricalEntry::new(
            1_700_000_000_000,
            1_700_000_000_000,
            "an apple".to_string(),
            nutrition.clone(),
        );

        let mut snapshot = idle_snapshot();
        snapshot.current = Some(DisplayedResult {
            entry_id: entry.id,
            nutrition,
        });
        snapshot.history = vec![entry];

        let view = SessionView::render(&snapshot, &presenter());

        assert_eq!(view.selected_entry_id, Some(1_700_000_000_000));
        match view.nutrition {
            NutritionView::Breakdown(breakdown) => {
                assert_eq!(breakdown.title, NUTRITION_TITLE);
                assert_eq!(breakdown.foods.len(), 1);
            }
            other => panic!("expected breakdown, got {:?}", other),
        }
        assert!(matches!(view.history, HistoryView::Entries { .. }));
    }
}
