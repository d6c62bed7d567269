use crate::domain::{BatchReport, RowAnalysis};
use crate::infrastructure::batch::{json_extract, reader, stats};
use crate::infrastructure::catalog::Catalog;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::security::{CostTracker, InputSanitizer};
use crisisdesk_errors::AppError;
use std::sync::Arc;
use std::time::Duration;

const MAX_DELAY_MS: u64 = 30_000;
const MAX_BATCH_ROWS: usize = 500;

pub struct BatchRequest {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Header of the complaint column; `None` means the first column.
    pub column: Option<String>,
    pub persona_id: String,
    pub platform_id: String,
    /// Pause between consecutive upstream calls, to respect provider rate
    /// limits. Clamped to [0, 30000].
    pub delay_ms: u64,
    pub auto_language: bool,
}

pub struct RunBatch {
    client: Arc<GeminiClient>,
    catalog: Arc<Catalog>,
    cost_tracker: Arc<CostTracker>,
}

impl RunBatch {
    pub fn new(
        client: Arc<GeminiClient>,
        catalog: Arc<Catalog>,
        cost_tracker: Arc<CostTracker>,
    ) -> Self {
        Self {
            client,
            catalog,
            cost_tracker,
        }
    }

    /// Sequential per-row analysis. A row whose reply holds no JSON object is
    /// recorded with the error sentinel and the loop continues; only a missing
    /// API key aborts the whole batch (before any call is made).
    pub async fn execute(&self, request: BatchRequest) -> Result<BatchReport, AppError> {
        if !self.client.has_api_key() {
            return Err(AppError::MissingApiKey);
        }

        let persona = self
            .catalog
            .persona(&request.persona_id)
            .ok_or_else(|| AppError::UnknownSelection(request.persona_id.clone()))?;
        let platform = self
            .catalog
            .platform(&request.platform_id)
            .ok_or_else(|| AppError::UnknownSelection(request.platform_id.clone()))?;

        let data = reader::read_complaint_column(
            &request.filename,
            &request.bytes,
            request.column.as_deref(),
        )?;

        if data.values.is_empty() {
            return Err(AppError::SpreadsheetError(
                "no messages found in the chosen column".to_string(),
            ));
        }
        if data.values.len() > MAX_BATCH_ROWS {
            return Err(AppError::SpreadsheetError(format!(
                "file holds {} messages; the limit per batch is {}",
                data.values.len(),
                MAX_BATCH_ROWS
            )));
        }

        if self
            .cost_tracker
            .check_and_increment_many(data.values.len() as u32)
            .is_err()
        {
            return Err(AppError::BudgetExceeded);
        }

        let delay = Duration::from_millis(request.delay_ms.min(MAX_DELAY_MS));
        tracing::info!(
            "Starting batch: {} rows, {}ms delay, persona={}, platform={}",
            data.values.len(),
            delay.as_millis(),
            persona.id,
            platform.id
        );

        let mut rows = Vec::with_capacity(data.values.len());
        for (i, message) in data.values.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(delay).await;
            }

            let row_index = i + 1;
            let scrubbed = InputSanitizer::scrub_batch_cell(message);

            let row = match self
                .client
                .analyze_row(&scrubbed, persona, platform, request.auto_language)
                .await
            {
                Ok(reply) => match json_extract::extract_row_verdict(&reply) {
                    Some(verdict) => RowAnalysis {
                        row_index,
                        message: message.clone(),
                        anger_score: verdict.anger_score,
                        risk_level: or_unknown(verdict.risk_level),
                        category: or_unknown(verdict.category),
                        suggested_reply: verdict.suggested_reply,
                        error: false,
                    },
                    None => {
                        tracing::warn!("Row {}: reply held no JSON object", row_index);
                        RowAnalysis::failed(row_index, message.clone(), &reply)
                    }
                },
                Err(e) => {
                    tracing::warn!("Row {}: upstream call failed: {}", row_index, e);
                    RowAnalysis::failed(row_index, message.clone(), e.user_message())
                }
            };
            rows.push(row);
        }

        let batch_stats = stats::compute_stats(&rows);
        let word_frequency = stats::word_frequency(
            rows.iter().map(|r| r.message.as_str()),
            &stats::default_stop_words(),
        );

        Ok(BatchReport::new(
            persona.label.clone(),
            platform.label.clone(),
            rows,
            batch_stats,
            word_frequency,
            data.skipped,
        ))
    }
}

fn or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        "Unknown".to_string()
    } else {
        value
    }
}
