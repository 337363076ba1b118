//! Monthly analytics report handler

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Datelike;
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::analytics::generate_monthly_report;
use tally_core::models::AnalyticsReport;

/// Query parameters selecting the analyzed month
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl PeriodQuery {
    /// The requested (year, month), defaulting to the current month
    pub fn resolve(&self) -> (i32, u32) {
        let today = chrono::Local::now().date_naive();
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

/// GET /api/users/:user_id/analytics - Full monthly report
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<AnalyticsReport>, AppError> {
    // Unknown users get a 404 rather than an empty report
    state.db.get_user(user_id)?;

    let (year, month) = params.resolve();
    let report = generate_monthly_report(&state.db, user_id, year, month)?;

    Ok(Json(report))
}
