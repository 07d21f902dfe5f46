//! Request-identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use hearth_domain::user::UserRole;

/// Caller identity inserted into request extensions by the access guard
/// after token validation.
///
/// Extracting it in a handler returns 401 if the guard never ran or the
/// request carried no valid token. Role enforcement beyond the guard's
/// route rules is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
