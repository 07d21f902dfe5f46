//! Access guard: token validation and role gating for every route.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use hearth_auth_types::cookie::HEARTH_SESSION_TOKEN;
use hearth_auth_types::identity::Identity;
use hearth_auth_types::token::validate_session_token;

use crate::error::ApiServiceError;
use crate::state::AppState;

/// Routes reachable with no token at all.
fn is_public(method: &Method, path: &str) -> bool {
    match *method {
        Method::GET => {
            path == "/healthz"
                || path == "/readyz"
                || path == "/listings"
                || path.starts_with("/listings/")
        }
        Method::POST => path == "/signup" || path == "/login" || path == "/lead",
        _ => false,
    }
}

/// Routes restricted to the admin role. Note that `PATCH /visit/{id}` is the
/// inquiry review call; `POST /visit` (direct booking) stays user-accessible.
fn is_admin_only(method: &Method, path: &str) -> bool {
    match *method {
        Method::POST => path == "/listings",
        Method::GET => path == "/inquiry" || path == "/visit" || path == "/reports",
        Method::PATCH | Method::PUT | Method::DELETE => path.starts_with("/visit/"),
        _ => false,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
}

/// Middleware applied to the whole router. Public paths pass through
/// untouched; everything else requires a valid session token (cookie or
/// bearer header), and admin paths additionally require the admin role.
/// A malformed or expired token is treated identically to a missing one.
pub async fn access_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if is_public(&method, &path) {
        return next.run(req).await;
    }

    let token = jar
        .get(HEARTH_SESSION_TOKEN)
        .map(|c| c.value().to_owned())
        .or_else(|| bearer_token(req.headers()));
    let Some(token) = token else {
        return ApiServiceError::Unauthorized.into_response();
    };
    let Ok(info) = validate_session_token(&token, &state.jwt_secret) else {
        return ApiServiceError::Unauthorized.into_response();
    };

    if is_admin_only(&method, &path) && !info.role.is_admin() {
        return ApiServiceError::Unauthorized.into_response();
    }

    req.extensions_mut().insert(Identity {
        user_id: info.user_id,
        role: info.role,
    });
    next.run(req).await
}
