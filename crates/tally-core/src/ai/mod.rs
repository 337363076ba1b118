//! Pluggable local AI backend abstraction
//!
//! Backend-agnostic interface for turning a month's analytics into
//! plain-language advice. All backends run locally (no cloud APIs).
//!
//! # Architecture
//!
//! - `InsightBackend` trait: defines the interface for advice generation
//! - `AIClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `OllamaBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `AI_BACKEND`: Backend to use (ollama, mock). Default: ollama
//! - `OLLAMA_HOST`: Ollama server URL (required for ollama backend)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)

mod mock;
mod ollama;
pub mod parsing;
pub mod types;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;
pub use types::{AdviceInsights, InsightRequest, UserProfile};

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for all AI backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait InsightBackend: Send + Sync {
    /// Generate advice for one month of analytics
    ///
    /// `preference` is an optional free-text goal from the user ("save for
    /// a laptop") folded into the prompt.
    async fn generate_insights(
        &self,
        request: &InsightRequest,
        preference: Option<&str>,
    ) -> Result<AdviceInsights>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;
}

/// Concrete AI client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AIClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AIClient {
    /// Create an AI client from environment variables
    ///
    /// Checks `AI_BACKEND` to determine which backend to use:
    /// - `ollama` (default): uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `mock`: canned responses for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("AI_BACKEND").unwrap_or_else(|_| "ollama".to_string());

        match backend.to_lowercase().as_str() {
            "ollama" => OllamaBackend::from_env().map(AIClient::Ollama),
            "mock" => Some(AIClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown AI_BACKEND, falling back to ollama");
                OllamaBackend::from_env().map(AIClient::Ollama)
            }
        }
    }

    /// Create an Ollama backend directly
    pub fn ollama(host: &str, model: &str) -> Self {
        AIClient::Ollama(OllamaBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AIClient::Mock(MockBackend::new())
    }
}

// Implement InsightBackend for AIClient by delegating to the inner backend
#[async_trait]
impl InsightBackend for AIClient {
    async fn generate_insights(
        &self,
        request: &InsightRequest,
        preference: Option<&str>,
    ) -> Result<AdviceInsights> {
        match self {
            AIClient::Ollama(b) => b.generate_insights(request, preference).await,
            AIClient::Mock(b) => b.generate_insights(request, preference).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AIClient::Ollama(b) => b.health_check().await,
            AIClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AIClient::Ollama(b) => b.model(),
            AIClient::Mock(b) => b.model(),
        }
    }
}
