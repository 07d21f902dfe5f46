use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use hearth_core::health::{healthz, readyz};
use hearth_core::middleware::request_id_layer;

use crate::guard::access_guard;
use crate::handlers::{
    auth::{login, logout, signup},
    inquiry::{create_inquiry, list_inquiries, review_inquiry},
    lead::create_lead,
    listing::{create_listing, get_listing, list_listings},
    profile::{change_password, get_profile, update_profile},
    report::get_reports,
    visit::{book_visit, delete_visit, list_visits, update_visit},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/login", delete(logout))
        // Leads
        .route("/lead", post(create_lead))
        // Listings
        .route("/listings", post(create_listing))
        .route("/listings", get(list_listings))
        .route("/listings/{id}", get(get_listing))
        // Inquiries
        .route("/inquiry", post(create_inquiry))
        .route("/inquiry", get(list_inquiries))
        // Visits (PATCH /visit/{id} keys on the inquiry id: it reviews the
        // inquiry and spawns the visit; PUT/DELETE key on the visit id)
        .route("/visit", post(book_visit))
        .route("/visit", get(list_visits))
        .route("/visit/{id}", patch(review_inquiry))
        .route("/visit/{id}", put(update_visit))
        .route("/visit/{id}", delete(delete_visit))
        // Profile
        .route("/user/profile", get(get_profile))
        .route("/user/profile", put(update_profile))
        .route("/user/profile", patch(change_password))
        // Reports
        .route("/reports", get(get_reports))
        .layer(middleware::from_fn_with_state(state.clone(), access_guard))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
