use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;

use hearth_auth_types::token::issue_session_token;
use hearth_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, PASSWORD_MIN_LEN, User, validate_email, validate_phone};
use crate::error::ApiServiceError;

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash. Any parse or
/// verification failure counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Take a required request field, recording its wire name when absent or
/// empty. Callers bail with `MissingFields` after collecting every name, so
/// the placeholder value is never observed.
pub(crate) fn require(
    field: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match field {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

pub struct SignupUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignupUseCase<R> {
    pub async fn execute(&self, input: SignupInput) -> Result<User, ApiServiceError> {
        let mut missing = Vec::new();
        let name = require(input.name, "name", &mut missing);
        let email = require(input.email, "email", &mut missing);
        let password = require(input.password, "password", &mut missing);
        let phone = require(input.phone, "phone", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        if !validate_email(&email) {
            return Err(ApiServiceError::InvalidEmail);
        }
        if password.len() < PASSWORD_MIN_LEN {
            return Err(ApiServiceError::PasswordTooShort);
        }
        if !validate_phone(&phone) {
            return Err(ApiServiceError::InvalidPhone);
        }

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiServiceError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = NewUser {
            name,
            email,
            password_hash: Some(hash_password(&password)?),
            phone,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
    pub token_exp: u64,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiServiceError> {
        let mut missing = Vec::new();
        let email = require(input.email, "email", &mut missing);
        let password = require(input.password, "password", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(ApiServiceError::NoSuchUser)?;

        // Lead-captured rows have no credential; they cannot log in.
        let Some(ref stored_hash) = user.password_hash else {
            return Err(ApiServiceError::InvalidCredential);
        };
        if !verify_password(&password, stored_hash) {
            return Err(ApiServiceError::InvalidCredential);
        }

        let (token, token_exp) = issue_session_token(user.id, user.role, &self.jwt_secret)
            .map_err(|e| anyhow::anyhow!("issue session token: {e}"))?;

        Ok(LoginOutput {
            user,
            token,
            token_exp,
        })
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordInput {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

pub struct ChangePasswordUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ChangePasswordUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: ChangePasswordInput,
    ) -> Result<(), ApiServiceError> {
        let mut missing = Vec::new();
        let old_password = require(input.old_password, "oldPassword", &mut missing);
        let new_password = require(input.new_password, "newPassword", &mut missing);
        if !missing.is_empty() {
            return Err(ApiServiceError::MissingFields(missing));
        }

        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;

        let Some(ref stored_hash) = user.password_hash else {
            return Err(ApiServiceError::IncorrectPassword);
        };
        if !verify_password(&old_password, stored_hash) {
            return Err(ApiServiceError::IncorrectPassword);
        }

        if new_password.len() < PASSWORD_MIN_LEN {
            return Err(ApiServiceError::PasswordTooShort);
        }

        let new_hash = hash_password(&new_password)?;
        self.repo.update_password(user_id, &new_hash).await
    }
}
