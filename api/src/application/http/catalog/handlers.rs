pub mod list_items;
