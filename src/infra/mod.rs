pub mod list_store;
pub mod map_store;
