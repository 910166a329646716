pub mod entities;
pub mod ports;
pub mod store;

pub use entities::*;
pub use ports::*;
pub use store::HistoryStore;
