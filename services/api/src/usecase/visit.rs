use chrono::{DateTime, Utc};

use hearth_domain::visit::VisitStatus;

use crate::domain::repository::{ListingRepository, VisitRepository};
use crate::domain::types::{NewVisit, Visit, parse_visit_date};
use crate::error::ApiServiceError;

// ── BookVisit ────────────────────────────────────────────────────────────────

/// Direct visit booking against a listing, independent of any inquiry.
pub struct BookVisitInput {
    pub listing_id: Option<i32>,
    pub date: Option<String>,
}

pub struct BookVisitUseCase<L: ListingRepository, V: VisitRepository> {
    pub listings: L,
    pub visits: V,
}

impl<L: ListingRepository, V: VisitRepository> BookVisitUseCase<L, V> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: BookVisitInput,
    ) -> Result<Visit, ApiServiceError> {
        let Some(listing_id) = input.listing_id else {
            return Err(ApiServiceError::MissingFields(vec!["propertyId"]));
        };

        let date: DateTime<Utc> = match input.date.as_deref() {
            Some(v) => parse_visit_date(v).ok_or(ApiServiceError::InvalidDate)?,
            None => Utc::now(),
        };

        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(ApiServiceError::ListingNotFound);
        }

        let visit = NewVisit {
            date,
            inquiry_id: None,
            user_id: Some(user_id),
            listing_id: Some(listing_id),
            created_at: Utc::now(),
        };
        self.visits.create(&visit).await
    }
}

// ── ListVisits ───────────────────────────────────────────────────────────────

pub struct ListVisitsUseCase<V: VisitRepository> {
    pub repo: V,
}

impl<V: VisitRepository> ListVisitsUseCase<V> {
    pub async fn execute(&self, status: Option<String>) -> Result<Vec<Visit>, ApiServiceError> {
        let status = match status.as_deref() {
            Some(v) => Some(VisitStatus::parse(v).ok_or(ApiServiceError::InvalidStatus)?),
            None => None,
        };
        self.repo.list(status).await
    }
}

// ── UpdateVisit ──────────────────────────────────────────────────────────────

pub struct UpdateVisitInput {
    pub date: Option<String>,
    pub status: Option<String>,
}

pub struct UpdateVisitUseCase<V: VisitRepository> {
    pub repo: V,
}

impl<V: VisitRepository> UpdateVisitUseCase<V> {
    pub async fn execute(&self, id: i32, input: UpdateVisitInput) -> Result<Visit, ApiServiceError> {
        if input.date.is_none() && input.status.is_none() {
            return Err(ApiServiceError::MissingData);
        }

        let date = match input.date.as_deref() {
            Some(v) => Some(parse_visit_date(v).ok_or(ApiServiceError::InvalidDate)?),
            None => None,
        };
        let status = match input.status.as_deref() {
            Some(v) => Some(VisitStatus::parse(v).ok_or(ApiServiceError::InvalidStatus)?),
            None => None,
        };

        self.repo
            .update(id, date, status)
            .await?
            .ok_or(ApiServiceError::VisitNotFound)
    }
}

// ── DeleteVisit ──────────────────────────────────────────────────────────────

pub struct DeleteVisitUseCase<V: VisitRepository> {
    pub repo: V,
}

impl<V: VisitRepository> DeleteVisitUseCase<V> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::VisitNotFound);
        }
        Ok(())
    }
}
