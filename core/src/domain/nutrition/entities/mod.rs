pub mod errors;
pub mod food_item;
pub mod nutrition_response;

pub use errors::*;
pub use food_item::*;
pub use nutrition_response::*;
