use crate::domain::CrisisReport;
use crate::infrastructure::catalog::Catalog;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::security::InputSanitizer;
use crisisdesk_errors::AppError;
use std::sync::Arc;

pub struct AnalyzeComplaint {
    client: Arc<GeminiClient>,
    catalog: Arc<Catalog>,
}

impl AnalyzeComplaint {
    pub fn new(client: Arc<GeminiClient>, catalog: Arc<Catalog>) -> Self {
        Self { client, catalog }
    }

    pub async fn execute(
        &self,
        complaint: String,
        persona_id: &str,
        platform_id: &str,
        auto_language: bool,
    ) -> Result<CrisisReport, AppError> {
        let complaint = InputSanitizer::validate_complaint(&complaint)?;

        let persona = self
            .catalog
            .persona(persona_id)
            .ok_or_else(|| AppError::UnknownSelection(persona_id.to_string()))?;
        let platform = self
            .catalog
            .platform(platform_id)
            .ok_or_else(|| AppError::UnknownSelection(platform_id.to_string()))?;

        let report_text = self
            .client
            .generate_report(&complaint, persona, platform, auto_language)
            .await?;

        Ok(CrisisReport::new(
            complaint,
            persona.label.clone(),
            platform.label.clone(),
            report_text,
        ))
    }
}
