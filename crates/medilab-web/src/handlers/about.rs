//! About page — lab story, certifications, service overview.

use axum::{extract::State, response::Html};

use crate::handlers::home::{footer_html, NAV_HTML};
use crate::state::SharedState;
use medilab_content::SiteContent;

pub async fn about_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_about(&state.content))
}

fn render_about(content: &SiteContent) -> String {
    let profile = content.profile();

    let certifications: String = profile
        .certifications
        .iter()
        .map(|c| {
            format!(
                r#"
            <div class="cert-card">
                <span class="cert-badge">✔</span>
                <span>{c}</span>
            </div>"#
            )
        })
        .collect();

    let services: String = content
        .services()
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="/services/{}">{} {}</a> — {}</li>"#,
                s.id, s.icon, s.name, s.description
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>About — {name}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main>
    <section class="page-hero">
        <div class="container">
            <h1>About {name}</h1>
            <p>{tagline}</p>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <h2 class="section-title">Who We Are</h2>
            <p class="about-text">{description}</p>
            <p class="about-text">Established in {established}, we process {tests_per_year} tests per
            year at a {accuracy_rate} accuracy rate, with a typical turnaround of {turnaround}.</p>
        </div>
    </section>

    <section class="section section-alt">
        <div class="container">
            <h2 class="section-title">Accreditations &amp; Certifications</h2>
            <div class="cert-grid">{certifications}</div>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <h2 class="section-title">What We Do</h2>
            <ul class="about-services">{services}</ul>
        </div>
    </section>
</main>
{footer}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        name = profile.name,
        nav = NAV_HTML,
        tagline = profile.tagline,
        description = profile.description,
        established = profile.established,
        tests_per_year = profile.tests_per_year,
        accuracy_rate = profile.accuracy_rate,
        turnaround = profile.turnaround_time,
        certifications = certifications,
        services = services,
        footer = footer_html(profile),
    )
}
