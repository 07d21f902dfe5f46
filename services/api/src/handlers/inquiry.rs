use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use hearth_domain::inquiry::InquiryStatus;

use crate::domain::types::Inquiry;
use crate::error::ApiServiceError;
use crate::handlers::visit::VisitResponse;
use crate::state::AppState;
use crate::usecase::inquiry::{
    CreateInquiryInput, CreateInquiryUseCase, ListInquiriesUseCase, ReviewInquiryInput,
    ReviewInquiryUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: i32,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub status: InquiryStatus,
    pub user_id: i32,
    pub property_id: i32,
    #[serde(serialize_with = "hearth_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            budget: inquiry.budget,
            location: inquiry.location,
            property_type: inquiry.property_type,
            status: inquiry.status,
            user_id: inquiry.user_id,
            property_id: inquiry.listing_id,
            created_at: inquiry.created_at,
        }
    }
}

// ── POST /inquiry ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub user_id: Option<i32>,
    pub property_id: Option<i32>,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
}

pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(body): Json<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), ApiServiceError> {
    let usecase = CreateInquiryUseCase {
        users: state.user_repo(),
        listings: state.listing_repo(),
        inquiries: state.inquiry_repo(),
    };
    let inquiry = usecase
        .execute(CreateInquiryInput {
            user_id: body.user_id,
            listing_id: body.property_id,
            budget: body.budget,
            location: body.location,
            property_type: body.property_type,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(inquiry.into())))
}

// ── GET /inquiry ─────────────────────────────────────────────────────────────

pub async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<InquiryResponse>>, ApiServiceError> {
    let usecase = ListInquiriesUseCase {
        repo: state.inquiry_repo(),
    };
    let inquiries = usecase.execute().await?;
    Ok(Json(inquiries.into_iter().map(Into::into).collect()))
}

// ── PATCH /visit/{inquiry_id} ────────────────────────────────────────────────
//
// The path segment is the *inquiry* id: this call reviews the inquiry and, on
// approval, reports the visit spawned for it.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInquiryRequest {
    pub status: Option<String>,
    pub visit_date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInquiryResponse {
    pub updated_inquiry: InquiryResponse,
    pub new_visit: Option<VisitResponse>,
}

pub async fn review_inquiry(
    State(state): State<AppState>,
    Path(inquiry_id): Path<i32>,
    Json(body): Json<ReviewInquiryRequest>,
) -> Result<Json<ReviewInquiryResponse>, ApiServiceError> {
    let usecase = ReviewInquiryUseCase {
        repo: state.inquiry_repo(),
    };
    let out = usecase
        .execute(
            inquiry_id,
            ReviewInquiryInput {
                status: body.status,
                visit_date: body.visit_date,
            },
        )
        .await?;
    Ok(Json(ReviewInquiryResponse {
        updated_inquiry: out.inquiry.into(),
        new_visit: out.visit.map(Into::into),
    }))
}
