//! AI insight handler

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use tally_core::ai::{InsightBackend, InsightRequest, UserProfile};
use tally_core::analytics::generate_monthly_report;
use tally_core::models::AnalyticsReport;
use tally_core::period::Period;
use tally_core::AdviceInsights;

use super::analytics::PeriodQuery;

/// Query parameters for the insights endpoint
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Optional free-text goal folded into the advice prompt
    pub preference: Option<String>,
}

/// Response pairing the analytics report with the generated advice
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub analytics: AnalyticsReport,
    pub ai_insights: AdviceInsights,
}

/// GET /api/users/:user_id/insights - Monthly report plus AI advice
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(params): Query<InsightQuery>,
) -> Result<Json<InsightsResponse>, AppError> {
    let Some(ai) = state.ai.as_ref() else {
        return Err(AppError::service_unavailable("AI backend not configured"));
    };

    let user = state.db.get_user(user_id)?;

    let (year, month) = PeriodQuery {
        year: params.year,
        month: params.month,
    }
    .resolve();
    let period = Period::resolve(year, month)?;
    let report = generate_monthly_report(&state.db, user_id, year, month)?;

    let request = InsightRequest {
        user_profile: UserProfile::student(user.currency_code),
        period: period.label(),
        summary: report.summary.clone(),
        category_distribution: report.categories.clone(),
    };

    let ai_insights = ai
        .generate_insights(&request, params.preference.as_deref())
        .await?;

    Ok(Json(InsightsResponse {
        analytics: report,
        ai_insights,
    }))
}
