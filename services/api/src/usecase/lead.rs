use chrono::Utc;

use hearth_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, validate_email, validate_phone};
use crate::error::ApiServiceError;
use crate::usecase::auth::require;

// ── CreateLead ───────────────────────────────────────────────────────────────

/// Lead capture: a contact record stored as a user row with no credential.
/// The record can later be upgraded by a full signup under a different email,
/// or left as-is for follow-up by an agent.
pub struct CreateLeadInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub struct CreateLeadUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateLeadUseCase<R> {
    pub async fn execute(&self, input: CreateLeadInput) -> Result<User, ApiServiceError> {
        let mut missing = Vec::new();
        let name = require(input.name, "name", &mut missing);
        let email = require(input.email, "email", &mut missing);
        let phone = require(input.phone, "phone", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        if !validate_email(&email) {
            return Err(ApiServiceError::InvalidEmail);
        }
        if !validate_phone(&phone) {
            return Err(ApiServiceError::InvalidPhone);
        }

        let now = Utc::now();
        let lead = NewUser {
            name,
            email,
            password_hash: None,
            phone,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&lead).await
    }
}
