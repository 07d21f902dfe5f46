use chrono::{DateTime, Utc};

use hearth_domain::inquiry::InquiryStatus;

use crate::domain::repository::{InquiryRepository, ListingRepository, UserRepository};
use crate::domain::types::{Inquiry, NewInquiry, TransitionOutcome, Visit, parse_visit_date};
use crate::error::ApiServiceError;

// ── CreateInquiry ────────────────────────────────────────────────────────────

pub struct CreateInquiryInput {
    pub user_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
}

pub struct CreateInquiryUseCase<U: UserRepository, L: ListingRepository, I: InquiryRepository> {
    pub users: U,
    pub listings: L,
    pub inquiries: I,
}

impl<U: UserRepository, L: ListingRepository, I: InquiryRepository>
    CreateInquiryUseCase<U, L, I>
{
    pub async fn execute(&self, input: CreateInquiryInput) -> Result<Inquiry, ApiServiceError> {
        let (user_id, listing_id) = match (input.user_id, input.listing_id) {
            (Some(user_id), Some(listing_id)) => (user_id, listing_id),
            (user_id, listing_id) => {
                let mut missing = Vec::new();
                if user_id.is_none() {
                    missing.push("userId");
                }
                if listing_id.is_none() {
                    missing.push("propertyId");
                }
                return Err(ApiServiceError::MissingFields(missing));
            }
        };

        if let Some(budget) = input.budget {
            if budget < 0 {
                return Err(ApiServiceError::InvalidBudget);
            }
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiServiceError::UserNotFound);
        }
        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(ApiServiceError::ListingNotFound);
        }

        let inquiry = NewInquiry {
            budget: input.budget,
            location: input.location,
            property_type: input.property_type,
            user_id,
            listing_id,
            created_at: Utc::now(),
        };
        self.inquiries.create(&inquiry).await
    }
}

// ── ListInquiries ────────────────────────────────────────────────────────────

pub struct ListInquiriesUseCase<I: InquiryRepository> {
    pub repo: I,
}

impl<I: InquiryRepository> ListInquiriesUseCase<I> {
    pub async fn execute(&self) -> Result<Vec<Inquiry>, ApiServiceError> {
        self.repo.list().await
    }
}

// ── ReviewInquiry ────────────────────────────────────────────────────────────

pub struct ReviewInquiryInput {
    pub status: Option<String>,
    pub visit_date: Option<String>,
}

/// `visit` is the record spawned by an approval; `None` on rejection.
#[derive(Debug)]
pub struct ReviewOutput {
    pub inquiry: Inquiry,
    pub visit: Option<Visit>,
}

pub struct ReviewInquiryUseCase<I: InquiryRepository> {
    pub repo: I,
}

impl<I: InquiryRepository> ReviewInquiryUseCase<I> {
    pub async fn execute(
        &self,
        inquiry_id: i32,
        input: ReviewInquiryInput,
    ) -> Result<ReviewOutput, ApiServiceError> {
        let status_value = match input.status.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => return Err(ApiServiceError::MissingFields(vec!["status"])),
        };
        // Only the two terminal statuses are legal transition targets;
        // "pending" and anything unknown are rejected alike.
        let status = match InquiryStatus::from_str_value(status_value) {
            Some(s) if s.is_terminal() => s,
            _ => return Err(ApiServiceError::InvalidStatus),
        };

        let visit_date: DateTime<Utc> = match input.visit_date.as_deref() {
            Some(v) => parse_visit_date(v).ok_or(ApiServiceError::InvalidDate)?,
            None => Utc::now(),
        };

        match self.repo.transition(inquiry_id, status, visit_date).await? {
            TransitionOutcome::Applied { inquiry, visit } => Ok(ReviewOutput { inquiry, visit }),
            TransitionOutcome::NotPending => Err(ApiServiceError::AlreadyReviewed),
            TransitionOutcome::NotFound => Err(ApiServiceError::InquiryNotFound),
        }
    }
}
