use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Listing;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::listing::{
    CreateListingInput, CreateListingUseCase, GetListingUseCase, ListListingsUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: i32,
    pub title: String,
    pub price: i64,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(serialize_with = "hearth_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            price: listing.price,
            location: listing.location,
            description: listing.description,
            image_url: listing.image_url,
            created_at: listing.created_at,
        }
    }
}

// ── POST /listings ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub async fn create_listing(
    State(state): State<AppState>,
    Json(body): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), ApiServiceError> {
    let usecase = CreateListingUseCase {
        repo: state.listing_repo(),
    };
    let listing = usecase
        .execute(CreateListingInput {
            title: body.title,
            price: body.price,
            location: body.location,
            description: body.description,
            image_url: body.image_url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(listing.into())))
}

// ── GET /listings ────────────────────────────────────────────────────────────

pub async fn list_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListingResponse>>, ApiServiceError> {
    let usecase = ListListingsUseCase {
        repo: state.listing_repo(),
    };
    let listings = usecase.execute().await?;
    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

// ── GET /listings/{id} ───────────────────────────────────────────────────────

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ListingResponse>, ApiServiceError> {
    let usecase = GetListingUseCase {
        repo: state.listing_repo(),
    };
    let listing = usecase.execute(id).await?;
    Ok(Json(listing.into()))
}
