use chrono::Utc;

use crate::domain::repository::ListingRepository;
use crate::domain::types::{Listing, NewListing};
use crate::error::ApiServiceError;
use crate::usecase::auth::require;

// ── CreateListing ────────────────────────────────────────────────────────────

pub struct CreateListingInput {
    pub title: Option<String>,
    /// `Some(0)` is a valid price; only absence and negatives are rejected.
    pub price: Option<i64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub struct CreateListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> CreateListingUseCase<R> {
    pub async fn execute(&self, input: CreateListingInput) -> Result<Listing, ApiServiceError> {
        let mut missing = Vec::new();
        let title = require(input.title, "title", &mut missing);
        // the 0 stands in only while "price" is recorded; the guard below returns first
        let price = input.price.unwrap_or_else(|| {
            missing.push("price");
            0
        });
        let location = require(input.location, "location", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        if price < 0 {
            return Err(ApiServiceError::InvalidPrice);
        }

        let listing = NewListing {
            title,
            price,
            location,
            description: input.description,
            image_url: input.image_url,
            created_at: Utc::now(),
        };
        self.repo.create(&listing).await
    }
}

// ── GetListing ───────────────────────────────────────────────────────────────

pub struct GetListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> GetListingUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Listing, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::ListingNotFound)
    }
}

// ── ListListings ─────────────────────────────────────────────────────────────

pub struct ListListingsUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> ListListingsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Listing>, ApiServiceError> {
        self.repo.list().await
    }
}
