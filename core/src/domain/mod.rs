pub mod assistant;
pub mod common;
pub mod history;
pub mod meal_input;
pub mod nutrition;
pub mod presentation;
