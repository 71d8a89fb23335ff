pub mod attributes;
pub mod types;
pub mod unicode;
