use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email};
use crate::error::ApiServiceError;
use crate::usecase::auth::require;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ApiServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: UpdateProfileInput,
    ) -> Result<User, ApiServiceError> {
        let mut missing = Vec::new();
        let name = require(input.name, "name", &mut missing);
        let email = require(input.email, "email", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        if !validate_email(&email) {
            return Err(ApiServiceError::InvalidEmail);
        }

        self.repo
            .update_profile(user_id, &name, &email)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}
