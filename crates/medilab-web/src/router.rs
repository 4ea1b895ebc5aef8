//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    about::about_page,
    contact::{contact_page, contact_submit},
    errors::{handle_panic, not_found},
    home::home,
    services::{service_detail, services_page},
    team::team_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared = SharedState::new(state);

    Router::new()
        // Pages
        .route("/", get(home))
        .route("/services", get(services_page))
        .route("/services/{service_id}", get(service_detail))
        .route("/team", get(team_page))
        .route("/contact", get(contact_page).post(contact_submit))
        .route("/about", get(about_page))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Anything else
        .fallback(not_found)

        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
