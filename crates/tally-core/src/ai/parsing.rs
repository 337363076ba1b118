//! JSON parsing helpers for AI backend responses
//!
//! Models often wrap their JSON payload in prose or ``` fences, so the
//! payload is located by brace-scanning before deserialization.

use crate::error::{Error, Result};

use super::types::AdviceInsights;

/// Parse advice insights from an AI response
pub fn parse_advice_response(response: &str) -> Result<AdviceInsights> {
    let response = response.trim();

    // Look for JSON object
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|e| {
                // Truncate long responses for the error message
                let truncated = if json_str.len() > 200 {
                    format!("{}...", &json_str[..200])
                } else {
                    json_str.to_string()
                };
                Error::InvalidData(format!("Invalid JSON from AI: {} | Raw: {}", e, truncated))
            })
        }
        _ => Err(Error::InvalidData(format!(
            "No JSON found in AI response | Raw: {}",
            if response.len() > 200 {
                format!("{}...", &response[..200])
            } else {
                response.to_string()
            }
        ))),
    }
}
