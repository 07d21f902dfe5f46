use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::ApiServiceError;
use crate::handlers::auth::UserResponse;
use crate::state::AppState;
use crate::usecase::lead::{CreateLeadInput, CreateLeadUseCase};

// ── POST /lead ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn create_lead(
    State(state): State<AppState>,
    Json(body): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiServiceError> {
    let usecase = CreateLeadUseCase {
        repo: state.user_repo(),
    };
    let lead = usecase
        .execute(CreateLeadInput {
            name: body.name,
            email: body.email,
            phone: body.phone,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(lead.into())))
}
