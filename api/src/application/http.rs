pub mod health;
pub mod history;
pub mod meal;
pub mod server;
pub mod session;
