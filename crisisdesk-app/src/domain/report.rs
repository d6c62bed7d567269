use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisReport {
    pub complaint: String,
    pub persona_label: String,
    pub platform_label: String,
    pub report_text: String,
}

impl CrisisReport {
    pub fn new(
        complaint: String,
        persona_label: String,
        platform_label: String,
        report_text: String,
    ) -> Self {
        Self {
            complaint,
            persona_label,
            platform_label,
            report_text,
        }
    }
}
