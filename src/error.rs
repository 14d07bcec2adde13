use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// Failures talking to the Ollama server
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Error connecting to Ollama. Is it running?")]
    Unreachable(String),

    #[error("Error communicating with Ollama")]
    BadStatus { status: u16, body: String },

    #[error("Unexpected response from Ollama: {0}")]
    InvalidBody(String),
}

impl UpstreamError {
    // Underlying cause, for logs only; never sent to the client
    pub fn cause(&self) -> String {
        match self {
            UpstreamError::Unreachable(cause) => cause.clone(),
            UpstreamError::BadStatus { status, body } => format!("{}: {}", status, body),
            UpstreamError::InvalidBody(cause) => cause.clone(),
        }
    }
}

// Errors returned from handlers. All of them are 500s with a `detail` message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Error classifying title: {0}")]
    Classification(UpstreamError),

    #[error("Failed to encode metrics: {0}")]
    Metrics(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(e) | AppError::Classification(e) => {
                tracing::error!(cause = %e.cause(), "{}", self);
            }
            AppError::Metrics(_) => tracing::error!("{}", self),
        }
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_messages() {
        assert_eq!(
            UpstreamError::Unreachable("refused".into()).to_string(),
            "Error connecting to Ollama. Is it running?"
        );
        let bad = UpstreamError::BadStatus {
            status: 404,
            body: "model not found".into(),
        };
        assert_eq!(bad.to_string(), "Error communicating with Ollama");
    }

    #[test]
    fn cause_keeps_upstream_detail() {
        assert_eq!(UpstreamError::Unreachable("refused".into()).cause(), "refused");
        let bad = UpstreamError::BadStatus {
            status: 500,
            body: "oom".into(),
        };
        assert_eq!(bad.cause(), "500: oom");
    }

    #[test]
    fn classification_wraps_inner_message() {
        let err = AppError::Classification(UpstreamError::Unreachable("x".into()));
        assert_eq!(
            err.to_string(),
            "Error classifying title: Error connecting to Ollama. Is it running?"
        );
    }

    #[test]
    fn every_error_is_a_500() {
        let resp = AppError::from(UpstreamError::InvalidBody("eof".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
