mod analyze_complaint;
mod run_batch;

pub use analyze_complaint::AnalyzeComplaint;
pub use run_batch::{BatchRequest, RunBatch};
