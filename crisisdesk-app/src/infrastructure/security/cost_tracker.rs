use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

const DAILY_ANALYSIS_LIMIT: u32 = 300;

/// Daily analysis budget. Batch mode charges one unit per uploaded row up
/// front so a large file cannot blow past the limit mid-run.
pub struct CostTracker {
    daily_analyses: AtomicU32,
    last_reset: Mutex<DateTime<Utc>>,
}

impl CostTracker {
    pub fn new() -> Self {
        Self {
            daily_analyses: AtomicU32::new(0),
            last_reset: Mutex::new(Utc::now()),
        }
    }

    pub fn check_and_increment(&self) -> Result<(), CostLimitError> {
        self.check_and_increment_many(1)
    }

    pub fn check_and_increment_many(&self, units: u32) -> Result<(), CostLimitError> {
        self.maybe_reset_daily();

        let current = self.daily_analyses.load(Ordering::SeqCst);
        if current.saturating_add(units) > DAILY_ANALYSIS_LIMIT {
            return Err(CostLimitError::DailyBudgetReached);
        }

        self.daily_analyses.fetch_add(units, Ordering::SeqCst);
        Ok(())
    }

    pub fn remaining(&self) -> u32 {
        DAILY_ANALYSIS_LIMIT.saturating_sub(self.daily_analyses.load(Ordering::SeqCst))
    }

    fn maybe_reset_daily(&self) {
        let now = Utc::now();
        let mut last_reset = self.last_reset.lock().unwrap();

        if now.date_naive() != last_reset.date_naive() {
            self.daily_analyses.store(0, Ordering::SeqCst);
            *last_reset = now;
            tracing::info!("Daily analysis budget reset");
        }
    }
}

impl Default for CostTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum CostLimitError {
    DailyBudgetReached,
}

impl CostLimitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DailyBudgetReached => "Daily analysis budget reached. Try again tomorrow.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_charge_respects_budget() {
        let tracker = CostTracker::new();
        assert!(tracker.check_and_increment_many(DAILY_ANALYSIS_LIMIT).is_ok());
        assert_eq!(tracker.remaining(), 0);
        assert!(tracker.check_and_increment().is_err());
    }

    #[test]
    fn oversized_batch_is_rejected_without_partial_charge() {
        let tracker = CostTracker::new();
        assert!(tracker
            .check_and_increment_many(DAILY_ANALYSIS_LIMIT + 1)
            .is_err());
        assert_eq!(tracker.remaining(), DAILY_ANALYSIS_LIMIT);
    }
}
