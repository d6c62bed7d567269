pub mod export;
pub mod json_extract;
pub mod reader;
pub mod stats;
