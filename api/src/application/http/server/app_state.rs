use std::sync::Arc;

use nutrition_assistant_core::{
    application::NutritionAssistant, domain::presentation::HistoryPresenter,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<NutritionAssistant>,
    pub presenter: HistoryPresenter,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutritionAssistant, presenter: HistoryPresenter) -> Self {
        Self {
            args,
            service: Arc::new(service),
            presenter,
        }
    }
}
