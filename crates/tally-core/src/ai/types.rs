//! Types exchanged with the insight generator

use serde::{Deserialize, Serialize};

use crate::models::{CategoryShare, Summary};

/// Minimal profile forwarded to the generator for tone and currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_type: String,
    pub currency: String,
}

impl UserProfile {
    /// Profile for a student user in the given currency
    pub fn student(currency: impl Into<String>) -> Self {
        Self {
            user_type: "student".to_string(),
            currency: currency.into(),
        }
    }
}

/// Structured input for one advice request
///
/// Only the report's summary and category distribution cross this boundary.
/// Trend, patterns, and spikes are computed by the engine but deliberately
/// not forwarded - they stay available to report consumers without widening
/// the generator contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRequest {
    pub user_profile: UserProfile,
    /// "YYYY-MM" label of the analyzed month
    pub period: String,
    pub summary: Summary,
    pub category_distribution: Vec<CategoryShare>,
}

/// Parsed advice returned by the generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceInsights {
    /// Plain-language explanation of the month's spending behavior
    pub summary: String,
    /// Concerning patterns, possibly empty
    pub patterns: Vec<String>,
    /// Practical improvements, budget-friendly by instruction
    pub suggestions: Vec<String>,
}
