pub mod clock;
pub mod history;
pub mod llm;
