//! Mock backend for testing

use async_trait::async_trait;

use crate::error::Result;

use super::types::{AdviceInsights, InsightRequest};
use super::InsightBackend;

/// Mock backend returning canned advice
#[derive(Debug, Clone)]
pub struct MockBackend {
    healthy: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// A mock that reports itself unavailable
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightBackend for MockBackend {
    async fn generate_insights(
        &self,
        request: &InsightRequest,
        _preference: Option<&str>,
    ) -> Result<AdviceInsights> {
        Ok(AdviceInsights {
            summary: format!(
                "In {} you earned {:.2} and spent {:.2}.",
                request.period, request.summary.income, request.summary.expense
            ),
            patterns: vec!["No unusual patterns detected.".to_string()],
            suggestions: vec![
                "Track daily expenses.".to_string(),
                "Set a weekly spending cap.".to_string(),
                "Review subscriptions monthly.".to_string(),
            ],
        })
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::types::UserProfile;
    use crate::models::Summary;

    #[tokio::test]
    async fn test_mock_echoes_period_and_totals() {
        let backend = MockBackend::new();
        let request = InsightRequest {
            user_profile: UserProfile::student("NPR"),
            period: "2024-06".to_string(),
            summary: Summary {
                income: 1500.0,
                expense: 500.0,
                savings: 1000.0,
                savings_ratio: 0.67,
            },
            category_distribution: vec![],
        };

        let advice = backend.generate_insights(&request, None).await.unwrap();
        assert!(advice.summary.contains("2024-06"));
        assert!(advice.summary.contains("1500.00"));
        assert_eq!(advice.suggestions.len(), 3);
        assert!(backend.health_check().await);
    }

    #[tokio::test]
    async fn test_unhealthy_mock() {
        assert!(!MockBackend::unhealthy().health_check().await);
    }
}
