use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "llama3:8b";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

// Inbound request for /fix-title
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TitleRequest {
    pub title: String,
    #[serde(default = "default_model")]
    pub model: String,
}

// Inbound request for /classify-title
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CategoryRequest {
    pub title: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TitleResponse {
    pub original: String,
    pub factual: String,
    pub processing_time: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CategoryResponse {
    pub title: String,
    pub category: String,
    pub color: String,
    pub processing_time: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

// Ollama API request format
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
    pub options: GenerateOptions,
}

// Sampling options forwarded to Ollama
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

// Ollama API response format
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GenerateResponse {
    pub response: String,
}

#[derive(Deserialize, Debug)]
pub struct TagsResponse {
    pub models: Vec<TagModel>,
}

#[derive(Deserialize, Debug)]
pub struct TagModel {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct VersionResponse {
    #[serde(default = "unknown_version")]
    pub version: String,
}

fn unknown_version() -> String {
    "unknown".to_string()
}

// Body of GET /health
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthReport {
    Healthy { ollama: OllamaStatus },
    Unhealthy { ollama: String },
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OllamaStatus {
    pub status: String,
    pub version: String,
}

impl HealthReport {
    pub fn available(version: String) -> Self {
        HealthReport::Healthy {
            ollama: OllamaStatus {
                status: "available".to_string(),
                version,
            },
        }
    }

    pub fn unavailable() -> Self {
        HealthReport::Unhealthy {
            ollama: "unavailable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_defaults_when_missing() {
        let req: TitleRequest = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert_eq!(req.model, "llama3:8b");
        let req: CategoryRequest =
            serde_json::from_value(json!({"title": "x", "model": "phi3:mini"})).unwrap();
        assert_eq!(req.model, "phi3:mini");
    }

    #[test]
    fn health_report_shapes() {
        assert_eq!(
            serde_json::to_value(HealthReport::unavailable()).unwrap(),
            json!({"status": "unhealthy", "ollama": "unavailable"})
        );
        assert_eq!(
            serde_json::to_value(HealthReport::available("0.1.32".into())).unwrap(),
            json!({"status": "healthy", "ollama": {"status": "available", "version": "0.1.32"}})
        );
    }

    #[test]
    fn version_defaults_to_unknown() {
        let v: VersionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(v.version, "unknown");
    }

    #[test]
    fn options_omit_empty_token_limit() {
        let opts = GenerateOptions {
            temperature: 0.1,
            num_predict: None,
        };
        let value = serde_json::to_value(opts).unwrap();
        assert!(value.get("num_predict").is_none());
    }
}
