use super::prompt::{build_batch_prompt, build_report_prompt};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::domain::{Persona, Platform};
use crisisdesk_errors::AppError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            std::env::var("GEMINI_MODEL").ok(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full report for the single-analysis form.
    pub async fn generate_report(
        &self,
        complaint: &str,
        persona: &Persona,
        platform: &Platform,
        auto_language: bool,
    ) -> Result<String, AppError> {
        let prompt = build_report_prompt(complaint, persona, platform, auto_language);
        self.generate(prompt).await
    }

    /// Simplified JSON-only analysis for one batch row.
    pub async fn analyze_row(
        &self,
        message: &str,
        persona: &Persona,
        platform: &Platform,
        auto_language: bool,
    ) -> Result<String, AppError> {
        let prompt = build_batch_prompt(message, persona, platform, auto_language);
        self.generate(prompt).await
    }

    async fn generate(&self, prompt: String) -> Result<String, AppError> {
        // No key: the form renders an inline warning, no call is attempted.
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GeminiError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::GeminiError(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeminiError(e.to_string()))?;

        completion
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| AppError::GeminiError("No response from AI".to_string()))
    }
}
