pub mod models;
pub mod rule_store;
