use crate::domain::repository::ReportRepository;
use crate::domain::types::{MonthCount, StatusCount};
use crate::error::ApiServiceError;

/// Aggregates behind `GET /reports`.
#[derive(Debug)]
pub struct ReportOutput {
    pub visits_by_status: Vec<StatusCount>,
    pub monthly_visits: Vec<MonthCount>,
    pub inquiries: u64,
}

pub struct VisitReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> VisitReportUseCase<R> {
    pub async fn execute(&self) -> Result<ReportOutput, ApiServiceError> {
        let visits_by_status = self.repo.visit_counts_by_status().await?;
        let monthly_visits = self.repo.visit_counts_by_month().await?;
        let inquiries = self.repo.inquiry_count().await?;
        Ok(ReportOutput {
            visits_by_status,
            monthly_visits,
            inquiries,
        })
    }
}
