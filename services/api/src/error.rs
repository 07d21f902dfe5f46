use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Api service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("missing data")]
    MissingData,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("phone number must be 10 digits")]
    InvalidPhone,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("price must be a non-negative number")]
    InvalidPrice,
    #[error("budget must be a non-negative integer")]
    InvalidBudget,
    #[error("invalid status")]
    InvalidStatus,
    #[error("invalid date")]
    InvalidDate,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("no user found with this email")]
    NoSuchUser,
    #[error("invalid credential")]
    InvalidCredential,
    #[error("unauthorized")]
    Unauthorized,
    #[error("user not found")]
    UserNotFound,
    #[error("listing not found")]
    ListingNotFound,
    #[error("inquiry not found")]
    InquiryNotFound,
    #[error("visit not found")]
    VisitNotFound,
    #[error("inquiry already reviewed")]
    AlreadyReviewed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidBudget => "INVALID_BUDGET",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidDate => "INVALID_DATE",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::NoSuchUser => "USER_NOT_FOUND",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ListingNotFound => "LISTING_NOT_FOUND",
            Self::InquiryNotFound => "INQUIRY_NOT_FOUND",
            Self::VisitNotFound => "VISIT_NOT_FOUND",
            Self::AlreadyReviewed => "ALREADY_REVIEWED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFields(_)
            | Self::MissingData
            | Self::InvalidEmail
            | Self::InvalidPhone
            | Self::PasswordTooShort
            | Self::InvalidPrice
            | Self::InvalidBudget
            | Self::InvalidStatus
            | Self::InvalidDate
            | Self::UserAlreadyExists
            | Self::IncorrectPassword => StatusCode::BAD_REQUEST,
            Self::NoSuchUser | Self::InvalidCredential | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::UserNotFound
            | Self::ListingNotFound
            | Self::InquiryNotFound
            | Self::VisitNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyReviewed => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        let body = if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            // The store's raw error string goes out in `details` so operators can
            // diagnose persistence failures from the response alone.
            serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "details": format!("{e:#}"),
            })
        } else {
            serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            })
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: ApiServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_enumerate_every_missing_field() {
        assert_error(
            ApiServiceError::MissingFields(vec!["userId", "propertyId"]),
            StatusCode::BAD_REQUEST,
            "MISSING_FIELDS",
            "missing fields: userId, propertyId",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_user_already_exists_as_400() {
        assert_error(
            ApiServiceError::UserAlreadyExists,
            StatusCode::BAD_REQUEST,
            "USER_ALREADY_EXISTS",
            "user already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_phone() {
        assert_error(
            ApiServiceError::InvalidPhone,
            StatusCode::BAD_REQUEST,
            "INVALID_PHONE",
            "phone number must be 10 digits",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_unauthorized() {
        assert_error(
            ApiServiceError::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "unauthorized",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_bad_credentials_as_401() {
        assert_error(
            ApiServiceError::InvalidCredential,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIAL",
            "invalid credential",
        )
        .await;
        assert_error(
            ApiServiceError::NoSuchUser,
            StatusCode::UNAUTHORIZED,
            "USER_NOT_FOUND",
            "no user found with this email",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_not_found_variants_as_404() {
        assert_error(
            ApiServiceError::InquiryNotFound,
            StatusCode::NOT_FOUND,
            "INQUIRY_NOT_FOUND",
            "inquiry not found",
        )
        .await;
        assert_error(
            ApiServiceError::VisitNotFound,
            StatusCode::NOT_FOUND,
            "VISIT_NOT_FOUND",
            "visit not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_already_reviewed_as_409() {
        assert_error(
            ApiServiceError::AlreadyReviewed,
            StatusCode::CONFLICT,
            "ALREADY_REVIEWED",
            "inquiry already reviewed",
        )
        .await;
    }

    #[tokio::test]
    async fn should_expose_details_on_internal() {
        let resp = ApiServiceError::Internal(anyhow::anyhow!("db error")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], "INTERNAL");
        assert_eq!(json["message"], "internal error");
        assert_eq!(json["details"], "db error");
    }
}
