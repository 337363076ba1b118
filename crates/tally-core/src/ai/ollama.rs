//! Ollama backend implementation
//!
//! HTTP client for the Ollama generate API. Builds one advice prompt from
//! the structured analytics payload and parses the model's JSON reply.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::parsing::parse_advice_response;
use super::types::{AdviceInsights, InsightRequest};
use super::InsightBackend;

/// Ollama backend
#[derive(Clone)]
pub struct OllamaBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables (`OLLAMA_HOST`, `OLLAMA_MODEL`)
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("OLLAMA_HOST").ok()?;
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string());
        Some(Self::new(&host, &model))
    }

    fn build_prompt(request: &InsightRequest, preference: Option<&str>) -> Result<String> {
        let json_data = serde_json::to_string_pretty(request)?;
        let preference_text = match preference {
            Some(p) if !p.trim().is_empty() => format!("\nUser preference: {}", p.trim()),
            _ => String::new(),
        };

        Ok(format!(
            r#"You are a financial assistant helping a {} improve spending habits.

Here is the user's financial data:
{}
{}

Tasks:
1. Explain the user's spending behavior simply.
2. Identify concerning patterns if any.
3. Suggest 3 practical and realistic improvements.
4. Do not assume missing data.
5. Keep suggestions budget-friendly.

Respond strictly in JSON format:
{{
  "summary": "...",
  "patterns": [],
  "suggestions": []
}}
"#,
            request.user_profile.user_type, json_data, preference_text
        ))
    }
}

/// Request to Ollama API
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response from Ollama API
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

#[async_trait]
impl InsightBackend for OllamaBackend {
    async fn generate_insights(
        &self,
        request: &InsightRequest,
        preference: Option<&str>,
    ) -> Result<AdviceInsights> {
        let prompt = Self::build_prompt(request, preference)?;

        let ollama_request = OllamaRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
        };

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .json(&ollama_request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let ollama_response: OllamaResponse = response.json().await?;
        debug!("Ollama advice response: {}", ollama_response.response);

        parse_advice_response(&ollama_response.response)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
