pub mod analyze_meal;
pub mod clear_meal;
pub mod remove_image;
pub mod update_description;
pub mod upload_image;
