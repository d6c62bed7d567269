mod batch;
mod catalog_info;
mod persona;
mod platform;
mod report;

pub use batch::{BatchReport, BatchStats, RowAnalysis, ERROR_SENTINEL};
pub use catalog_info::CatalogInfo;
pub use persona::Persona;
pub use platform::Platform;
pub use report::CrisisReport;
