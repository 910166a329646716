use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    history::entities::HistoricalEntry,
    presentation::{Measure, format_amount},
};

pub const HISTORY_EMPTY_MESSAGE: &str =
    "Your meal history is empty. Analyze a meal to start building it!";
pub const HISTORY_TITLE: &str = "Meal History";
pub const DESCRIPTION_MAX_CHARS: usize = 80;
const ELLIPSIS: &str = "...";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HistoryView {
    Empty { message: String },
    Entries { title: String, rows: Vec<HistoryRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRow {
    pub id: i64,
    pub description: String,
    pub recorded_at: String,
    pub total_calories: Measure,
    pub view_enabled: bool,
    pub delete_enabled: bool,
}

/// Cuts `text` to its first [`DESCRIPTION_MAX_CHARS`] characters, marking the cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Zone used for row timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The host zone, resolved per timestamp so DST changes are honoured.
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Copy)]
pub struct HistoryPresenter {
    zone: DisplayZone,
}

impl Default for HistoryPresenter {
    fn default() -> Self {
        Self::local()
    }
}

impl HistoryPresenter {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            zone: DisplayZone::Fixed(offset),
        }
    }

    /// Presenter rendering timestamps in the host's local time zone.
    pub fn local() -> Self {
        Self {
            zone: DisplayZone::Local,
        }
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn format_timestamp(&self, millis: i64) -> String {
        let Some(at) = DateTime::from_timestamp_millis(millis) else {
            return millis.to_string();
        };

        match self.zone {
            DisplayZone::Local => at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            DisplayZone::Fixed(offset) => {
                at.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
            }
        }
    }

    /// Newest first; entries with equal timestamps keep their stored order.
    pub fn render(&self, entries: &[HistoricalEntry], loading: bool) -> HistoryView {
        if entries.is_empty() {
            return HistoryView::Empty {
                message: HISTORY_EMPTY_MESSAGE.to_string(),
            };
        }

        let mut sorted: Vec<&HistoricalEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let rows = sorted
            .into_iter()
            .map(|entry| {
                let total = entry.nutrition_data.total_calories();
                HistoryRow {
                    id: entry.id,
                    description: truncate_description(&entry.meal_description),
                    recorded_at: self.format_timestamp(entry.timestamp),
                    total_calories: Measure {
                        value: total,
                        label: format!("Total: {} kcal", format_amount(total)),
                    },
                    view_enabled: !loading,
                    delete_enabled: !loading,
                }
            })
            .collect();

        HistoryView::Entries {
            title: HISTORY_TITLE.to_string(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::{FoodItem, MacroNutrients, NutritionResponse};

    fn utc() -> HistoryPresenter {
        HistoryPresenter::new(FixedOffset::east_opt(0).unwrap())
    }

    #[test]
    fn test_local_zone_resolves_offset_per_timestamp() {
        let presenter = HistoryPresenter::local();
        assert_eq!(presenter.zone(), DisplayZone::Local);

        // Mid-winter and mid-summer, so a DST shift between them is picked up.
        for millis in [1_704_067_200_000_i64, 1_719_792_000_000] {
            let expected = DateTime::from_timestamp_millis(millis)
                .unwrap()
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string();
            assert_eq!(presenter.format_timestamp(millis), expected);
        }
    }

    #[test]
    fn test_fixed_zone_applies_offset() {
        let presenter = HistoryPresenter::new(FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(presenter.format_timestamp(0), "1970-01-01 02:00:00");
    }

    fn entry(id: i64, timestamp: i64, description: &str, calories: &[f64]) -> HistoricalEntry {
        let foods = calories
            .iter()
            .map(|kcal| FoodItem::new("food", "1", *kcal, MacroNutrients::default(), 0.9))
            .collect();
        HistoricalEntry::new(id, timestamp, description.to_string(), NutritionResponse::new(foods))
    }

    fn rows(view: HistoryView) -> Vec<HistoryRow> {
        match view {
            HistoryView::Entries { rows, .. } => rows,
            HistoryView::Empty { .. } => panic!("expected rows"),
        }
    }

    #[test]
    fn test_empty_history_renders_message() {
        assert_eq!(
            utc().render(&[], false),
            HistoryView::Empty {
                message: HISTORY_EMPTY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_rows_sorted_newest_first() {
        let entries = [
            entry(1, 100, "a", &[1.0]),
            entry(2, 300, "b", &[1.0]),
            entry(3, 200, "c", &[1.0]),
        ];

        let ids: Vec<_> = rows(utc().render(&entries, false))
            .iter()
            .map(|row| row.id)
            .collect();

        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn test_render_is_stable_across_calls() {
        let entries = [
            entry(1, 100, "a", &[1.0]),
            entry(2, 300, "b", &[1.0]),
            entry(3, 300, "c", &[1.0]),
        ];
        let presenter = utc();

        let first = presenter.render(&entries, false);
        let second = presenter.render(&entries, false);

        assert_eq!(first, second);
        let ids: Vec<_> = rows(first).iter().map(|row| row.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn test_long_description_is_truncated() {
        let description = "x".repeat(90);
        let row = rows(utc().render(&[entry(1, 1, &description, &[])], false)).remove(0);

        assert_eq!(row.description, format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn test_description_at_limit_is_kept() {
        let description = "y".repeat(80);
        assert_eq!(truncate_description(&description), description);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let description = "é".repeat(81);
        assert_eq!(truncate_description(&description), format!("{}...", "é".repeat(80)));
    }

    #[test]
    fn test_row_shows_total_and_timestamp() {
        let row = rows(utc().render(&[entry(9, 0, "eggs", &[70.0, 78.5])], false)).remove(0);

        assert_eq!(row.total_calories.value, 148.5);
        assert_eq!(row.total_calories.label, "Total: 148.5 kcal");
        assert_eq!(row.recorded_at, "1970-01-01 00:00:00");
        assert!(row.view_enabled && row.delete_enabled);
    }

    #[test]
    fn test_actions_disabled_while_loading() {
        let row = rows(utc().render(&[entry(1, 1, "eggs", &[70.0])], true)).remove(0);
        assert!(!row.view_enabled);
        assert!(!row.delete_enabled);
    }
}
