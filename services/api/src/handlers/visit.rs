use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use hearth_auth_types::identity::Identity;
use hearth_domain::visit::VisitStatus;

use crate::domain::types::Visit;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::visit::{
    BookVisitInput, BookVisitUseCase, DeleteVisitUseCase, ListVisitsUseCase, UpdateVisitInput,
    UpdateVisitUseCase,
};

/// Back-reference to the inquiry a visit was spawned from.
#[derive(Serialize)]
pub struct InquiryRef {
    pub id: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitResponse {
    pub id: i32,
    #[serde(serialize_with = "hearth_core::serde::to_rfc3339_ms")]
    pub date: chrono::DateTime<chrono::Utc>,
    pub status: VisitStatus,
    pub inquiry: Option<InquiryRef>,
    pub user_id: Option<i32>,
    pub property_id: Option<i32>,
    #[serde(serialize_with = "hearth_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Visit> for VisitResponse {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            date: visit.date,
            status: visit.status,
            inquiry: visit.inquiry_id.map(|id| InquiryRef { id }),
            user_id: visit.user_id,
            property_id: visit.listing_id,
            created_at: visit.created_at,
        }
    }
}

// ── POST /visit ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookVisitRequest {
    pub property_id: Option<i32>,
    pub date: Option<String>,
}

pub async fn book_visit(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<BookVisitRequest>,
) -> Result<(StatusCode, Json<VisitResponse>), ApiServiceError> {
    let usecase = BookVisitUseCase {
        listings: state.listing_repo(),
        visits: state.visit_repo(),
    };
    let visit = usecase
        .execute(
            identity.user_id,
            BookVisitInput {
                listing_id: body.property_id,
                date: body.date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(visit.into())))
}

// ── GET /visit ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VisitListQuery {
    pub status: Option<String>,
}

pub async fn list_visits(
    State(state): State<AppState>,
    Query(query): Query<VisitListQuery>,
) -> Result<Json<Vec<VisitResponse>>, ApiServiceError> {
    let usecase = ListVisitsUseCase {
        repo: state.visit_repo(),
    };
    let visits = usecase.execute(query.status).await?;
    Ok(Json(visits.into_iter().map(Into::into).collect()))
}

// ── PUT /visit/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisitRequest {
    pub date: Option<String>,
    pub status: Option<String>,
}

pub async fn update_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateVisitRequest>,
) -> Result<Json<VisitResponse>, ApiServiceError> {
    let usecase = UpdateVisitUseCase {
        repo: state.visit_repo(),
    };
    let visit = usecase
        .execute(
            id,
            UpdateVisitInput {
                date: body.date,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(visit.into()))
}

// ── DELETE /visit/{id} ───────────────────────────────────────────────────────

pub async fn delete_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteVisitUseCase {
        repo: state.visit_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
