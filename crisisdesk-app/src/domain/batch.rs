use serde::{Deserialize, Serialize};

/// Sentinel recorded in `risk_level` and `category` when a reply held no
/// parseable JSON object.
pub const ERROR_SENTINEL: &str = "Error";

/// Analysis outcome for a single uploaded row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowAnalysis {
    pub row_index: usize,
    pub message: String,
    pub anger_score: Option<u8>,
    pub risk_level: String,
    pub category: String,
    pub suggested_reply: String,
    pub error: bool,
}

impl RowAnalysis {
    pub fn failed(row_index: usize, message: String, raw_reply: &str) -> Self {
        Self {
            row_index,
            message,
            anger_score: None,
            risk_level: ERROR_SENTINEL.to_string(),
            category: ERROR_SENTINEL.to_string(),
            suggested_reply: truncate(raw_reply, 200),
            error: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_rows: usize,
    pub error_rows: usize,
    /// (risk level, count), descending by count. Error rows excluded.
    pub risk_level_counts: Vec<(String, u32)>,
    /// (category, count), descending by count. Error rows excluded.
    pub category_counts: Vec<(String, u32)>,
    pub average_anger_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub id: uuid::Uuid,
    pub persona_label: String,
    pub platform_label: String,
    pub rows: Vec<RowAnalysis>,
    pub stats: BatchStats,
    /// (word, count), descending by count, case-insensitive, stop-words removed.
    pub word_frequency: Vec<(String, u32)>,
    /// Uploaded rows with an empty complaint cell, skipped before analysis.
    pub skipped_rows: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl BatchReport {
    pub fn new(
        persona_label: String,
        platform_label: String,
        rows: Vec<RowAnalysis>,
        stats: BatchStats,
        word_frequency: Vec<(String, u32)>,
        skipped_rows: usize,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            persona_label,
            platform_label,
            rows,
            stats,
            word_frequency,
            skipped_rows,
            created_at: chrono::Utc::now(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_row_carries_sentinel_and_truncated_reply() {
        let raw = "x".repeat(500);
        let row = RowAnalysis::failed(3, "msg".to_string(), &raw);
        assert!(row.error);
        assert_eq!(row.risk_level, ERROR_SENTINEL);
        assert_eq!(row.category, ERROR_SENTINEL);
        assert_eq!(row.anger_score, None);
        assert_eq!(row.suggested_reply.chars().count(), 201); // 200 + ellipsis
    }

    #[test]
    fn short_reply_is_kept_whole() {
        let row = RowAnalysis::failed(0, "msg".to_string(), "plain text reply");
        assert_eq!(row.suggested_reply, "plain text reply");
    }
}
