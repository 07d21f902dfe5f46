#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use hearth_domain::inquiry::InquiryStatus;
use hearth_domain::visit::VisitStatus;

use crate::domain::types::{
    Inquiry, Listing, MonthCount, NewInquiry, NewListing, NewUser, NewVisit, StatusCount,
    TransitionOutcome, User, Visit,
};
use crate::error::ApiServiceError;

/// Repository for user accounts (signup, leads, profile).
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiServiceError>;
    /// Update name + email. Returns the updated row, `None` if the id is gone.
    async fn update_profile(
        &self,
        id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, ApiServiceError>;
    async fn update_password(&self, id: i32, password_hash: &str)
    -> Result<(), ApiServiceError>;
}

/// Repository for property listings.
pub trait ListingRepository: Send + Sync {
    async fn create(&self, listing: &NewListing) -> Result<Listing, ApiServiceError>;
    async fn list(&self) -> Result<Vec<Listing>, ApiServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Listing>, ApiServiceError>;
}

/// Repository for property inquiries.
pub trait InquiryRepository: Send + Sync {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiServiceError>;
    async fn list(&self) -> Result<Vec<Inquiry>, ApiServiceError>;

    /// Atomically transition a pending inquiry to a terminal status and, on
    /// approval, insert the spawned visit in the same transaction. The
    /// update is conditional on the current status still being `pending`.
    async fn transition(
        &self,
        id: i32,
        status: InquiryStatus,
        visit_date: DateTime<Utc>,
    ) -> Result<TransitionOutcome, ApiServiceError>;
}

/// Repository for site visits.
pub trait VisitRepository: Send + Sync {
    async fn create(&self, visit: &NewVisit) -> Result<Visit, ApiServiceError>;
    async fn list(&self, status: Option<VisitStatus>) -> Result<Vec<Visit>, ApiServiceError>;
    /// Update date and/or status. Returns the updated row, `None` if absent.
    async fn update(
        &self,
        id: i32,
        date: Option<DateTime<Utc>>,
        status: Option<VisitStatus>,
    ) -> Result<Option<Visit>, ApiServiceError>;
    /// Delete a visit. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
}

/// Read-only aggregates for the admin dashboard.
pub trait ReportRepository: Send + Sync {
    async fn visit_counts_by_status(&self) -> Result<Vec<StatusCount>, ApiServiceError>;
    async fn visit_counts_by_month(&self) -> Result<Vec<MonthCount>, ApiServiceError>;
    async fn inquiry_count(&self) -> Result<u64, ApiServiceError>;
}
