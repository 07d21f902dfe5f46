use axum::{Json, extract::State};
use serde::Serialize;

use hearth_domain::visit::VisitStatus;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::report::VisitReportUseCase;

#[derive(Serialize)]
pub struct StatusCountResponse {
    pub status: VisitStatus,
    pub count: i64,
}

#[derive(Serialize)]
pub struct MonthCountResponse {
    #[serde(serialize_with = "hearth_core::serde::to_rfc3339_ms")]
    pub month: chrono::DateTime<chrono::Utc>,
    pub count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsResponse {
    pub visits: Vec<StatusCountResponse>,
    pub monthly_visits: Vec<MonthCountResponse>,
    pub inquiries: u64,
}

// ── GET /reports ─────────────────────────────────────────────────────────────

pub async fn get_reports(
    State(state): State<AppState>,
) -> Result<Json<ReportsResponse>, ApiServiceError> {
    let usecase = VisitReportUseCase {
        repo: state.report_repo(),
    };
    let report = usecase.execute().await?;
    Ok(Json(ReportsResponse {
        visits: report
            .visits_by_status
            .into_iter()
            .map(|row| StatusCountResponse {
                status: row.status,
                count: row.count,
            })
            .collect(),
        monthly_visits: report
            .monthly_visits
            .into_iter()
            .map(|row| MonthCountResponse {
                month: row.month,
                count: row.count,
            })
            .collect(),
        inquiries: report.inquiries,
    }))
}
