mod batch;
mod home;

pub use batch::BatchPage;
pub use home::{AnalyzeComplaintFn, GetCatalogFn, HomePage};
