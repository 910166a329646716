pub mod delete_entry;
pub mod select_entry;
