use crate::application::{AnalyzeComplaint, RunBatch};
use crate::domain::BatchReport;
use crate::infrastructure::catalog::Catalog;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::security::{CostTracker, RateLimiter};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Finished batch reports are kept this long so the export download can find
/// them. Nothing is persisted.
const REPORT_TTL_SECS: i64 = 3600;

#[derive(Clone)]
pub struct AppContext {
    pub analyze_complaint: Arc<AnalyzeComplaint>,
    pub run_batch: Arc<RunBatch>,
    pub catalog: Arc<Catalog>,
    pub rate_limiter: RateLimiter,
    pub cost_tracker: Arc<CostTracker>,
    batch_reports: Arc<DashMap<Uuid, BatchReport>>,
    api_key_present: bool,
}

impl AppContext {
    pub fn from_env() -> Self {
        let client = Arc::new(GeminiClient::from_env());
        if client.has_api_key() {
            tracing::info!("Gemini API key configured");
        } else {
            tracing::warn!("GEMINI_API_KEY not set; analyses will show an inline warning");
        }

        let catalog = Arc::new(Catalog::load());
        let cost_tracker = Arc::new(CostTracker::new());
        let api_key_present = client.has_api_key();

        Self {
            analyze_complaint: Arc::new(AnalyzeComplaint::new(client.clone(), catalog.clone())),
            run_batch: Arc::new(RunBatch::new(
                client,
                catalog.clone(),
                cost_tracker.clone(),
            )),
            catalog,
            rate_limiter: RateLimiter::new(),
            cost_tracker,
            batch_reports: Arc::new(DashMap::new()),
            api_key_present,
        }
    }

    pub fn api_key_present(&self) -> bool {
        self.api_key_present
    }

    pub fn store_report(&self, report: BatchReport) -> Uuid {
        let cutoff = chrono::Utc::now() - chrono::Duration::seconds(REPORT_TTL_SECS);
        self.batch_reports.retain(|_, r| r.created_at > cutoff);

        let id = report.id;
        self.batch_reports.insert(id, report);
        id
    }

    pub fn report(&self, id: &Uuid) -> Option<BatchReport> {
        self.batch_reports.get(id).map(|r| r.value().clone())
    }
}
