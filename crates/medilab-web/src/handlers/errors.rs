//! 404 fallback and the generic 500 page.

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::handlers::home::{footer_html, NAV_HTML};
use crate::state::SharedState;

/// Router fallback for any unmatched path.
pub async fn not_found(State(state): State<SharedState>) -> (StatusCode, Html<String>) {
    let profile = state.content.profile();
    (
        StatusCode::NOT_FOUND,
        Html(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Page Not Found — {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main>
    <section class="error-page">
        <div class="container">
            <div class="error-code">404</div>
            <h1>Page Not Found</h1>
            <p>The page you are looking for does not exist or has moved.</p>
            <div class="hero-actions">
                <a class="btn btn-primary" href="/">Back to Home</a>
                <a class="btn btn-outline" href="/services">Browse Services</a>
            </div>
        </div>
    </section>
</main>
{}
</body>
</html>"#,
            profile.name,
            NAV_HTML,
            footer_html(profile),
        )),
    )
}

/// Installed via `CatchPanicLayer::custom`. The panic payload goes to the
/// server log; the visitor sees only the generic page.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%detail, "unhandled panic while serving request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Server Error</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main>
    <section class="error-page">
        <div class="container">
            <div class="error-code">500</div>
            <h1>Something Went Wrong</h1>
            <p>An unexpected error occurred on our side. Please try again in a moment.</p>
            <div class="hero-actions">
                <a class="btn btn-primary" href="/">Back to Home</a>
            </div>
        </div>
    </section>
</main>
</body>
</html>"#,
            NAV_HTML,
        )),
    )
        .into_response()
}
