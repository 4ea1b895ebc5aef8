//! Service catalog and per-service detail pages.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;

use crate::flash::{self, Flash};
use crate::handlers::home::{footer_html, NAV_HTML};
use crate::handlers::flash_banner;
use crate::state::SharedState;
use medilab_content::{ServiceOffering, SiteContent};

pub async fn services_page(
    State(state): State<SharedState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, pending) = flash::take(jar);
    (
        jar,
        Html(render_catalog(&state.content, &flash_banner(pending.as_ref()))),
    )
}

/// Unknown ids are not an error page: flash a warning and send the visitor
/// back to the catalog.
pub async fn service_detail(
    State(state): State<SharedState>,
    jar: SignedCookieJar,
    Path(service_id): Path<String>,
) -> Response {
    match state.content.service(&service_id) {
        Some(offering) => (jar, Html(render_detail(&state.content, offering))).into_response(),
        None => {
            let jar = flash::set(jar, &Flash::error("Service not found."));
            (jar, Redirect::to("/services")).into_response()
        }
    }
}

fn render_catalog(content: &SiteContent, flash_html: &str) -> String {
    let profile = content.profile();

    let cards: String = content
        .services()
        .iter()
        .map(|s| {
            let tests: String = s.tests.iter().map(|t| format!("<li>{t}</li>")).collect();
            format!(
                r#"
            <div class="service-card">
                <div class="service-icon">{}</div>
                <h3>{}</h3>
                <p>{}</p>
                <ul class="test-list">{}</ul>
                <a class="btn btn-outline btn-sm" href="/services/{}">View Details</a>
            </div>"#,
                s.icon, s.name, s.description, tests, s.id
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Services — {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
{}
<main>
    <section class="page-hero">
        <div class="container">
            <h1>Diagnostic Services</h1>
            <p>Six specialized departments under one roof, with results in {}.</p>
        </div>
    </section>
    <section class="section">
        <div class="container card-grid">{}</div>
    </section>
</main>
{}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        profile.name,
        NAV_HTML,
        flash_html,
        profile.turnaround_time,
        cards,
        footer_html(profile),
    )
}

fn render_detail(content: &SiteContent, offering: &ServiceOffering) -> String {
    let profile = content.profile();

    let tests: String = offering
        .tests
        .iter()
        .map(|t| {
            format!(
                r#"
            <div class="test-card">
                <span class="test-check">✓</span>
                <span>{t}</span>
            </div>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main>
    <section class="page-hero">
        <div class="container">
            <div class="detail-icon">{}</div>
            <h1>{}</h1>
            <p>{}</p>
        </div>
    </section>
    <section class="section">
        <div class="container">
            <h2 class="section-title">Representative Tests</h2>
            <div class="test-grid">{}</div>
            <div class="detail-meta">
                <p>Typical turnaround: <strong>{}</strong> · Accuracy rate: <strong>{}</strong></p>
            </div>
            <div class="hero-actions">
                <a class="btn btn-primary" href="/contact">Request This Service</a>
                <a class="btn btn-outline" href="/services">← All Services</a>
            </div>
        </div>
    </section>
</main>
{}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        offering.name,
        profile.name,
        NAV_HTML,
        offering.icon,
        offering.name,
        offering.description,
        tests,
        profile.turnaround_time,
        profile.accuracy_rate,
        footer_html(profile),
    )
}
