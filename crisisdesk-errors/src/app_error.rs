use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Invalid complaint text: {0}")]
    InvalidComplaint(String),

    #[error("Unknown persona or platform: {0}")]
    UnknownSelection(String),

    #[error("Failed to reach the AI service: {0}")]
    GeminiError(String),

    #[error("Failed to read spreadsheet: {0}")]
    SpreadsheetError(String),

    #[error("Failed to build export: {0}")]
    ExportError(String),

    #[error("Daily analysis budget exceeded")]
    BudgetExceeded,

    #[error("Batch report not found")]
    ReportNotFound,

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("API key") {
            Ok(AppError::MissingApiKey)
        } else if s.starts_with("Invalid complaint") {
            Ok(AppError::InvalidComplaint(s.to_string()))
        } else if s.starts_with("Unknown persona") {
            Ok(AppError::UnknownSelection(s.to_string()))
        } else if s.starts_with("Failed to reach") {
            Ok(AppError::GeminiError(s.to_string()))
        } else if s.starts_with("Failed to read spreadsheet") {
            Ok(AppError::SpreadsheetError(s.to_string()))
        } else if s.starts_with("Failed to build export") {
            Ok(AppError::ExportError(s.to_string()))
        } else if s.contains("budget") {
            Ok(AppError::BudgetExceeded)
        } else if s.contains("not found") {
            Ok(AppError::ReportNotFound)
        } else if s.contains("timeout") {
            Ok(AppError::Timeout)
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingApiKey => {
                "No API key configured. Set GEMINI_API_KEY before starting an analysis."
            }
            Self::InvalidComplaint(_) => "The complaint text could not be accepted. Check it and try again.",
            Self::UnknownSelection(_) => "Pick a persona and a platform from the lists.",
            Self::GeminiError(_) => "The AI service is unavailable right now. Try again in a moment.",
            Self::SpreadsheetError(_) => "The uploaded file could not be read. Use a CSV or XLSX file.",
            Self::ExportError(_) => "The export could not be generated. Try again.",
            Self::BudgetExceeded => "The daily analysis budget is used up. Try again tomorrow.",
            Self::ReportNotFound => "That batch report has expired. Run the batch again.",
            Self::Timeout => "The request took too long. Try again.",
            Self::Internal(_) => "Something went wrong on the server. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let (status, message) = match &self {
                AppError::MissingApiKey => {
                    (StatusCode::SERVICE_UNAVAILABLE, self.user_message().to_string())
                }
                AppError::InvalidComplaint(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::UnknownSelection(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::GeminiError(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
                AppError::SpreadsheetError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::ExportError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
                AppError::BudgetExceeded => {
                    (StatusCode::TOO_MANY_REQUESTS, self.user_message().to_string())
                }
                AppError::ReportNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                AppError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "Timeout".to_string()),
                AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            };
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
