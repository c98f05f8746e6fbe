pub mod catalog;
pub mod query_extractor;
pub mod server;
