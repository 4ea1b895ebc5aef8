//! Home page — hero, stats, service grid, team preview, embedded contact form.

use axum::{extract::State, response::Html};
use axum_extra::extract::SignedCookieJar;

use crate::flash;
use crate::forms::{ContactForm, ValidationErrors};
use crate::handlers::{contact, flash_banner};
use crate::state::SharedState;
use medilab_content::{LabProfile, SiteContent};

/// Navigation fragment shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn home(
    State(state): State<SharedState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, pending) = flash::take(jar);
    (
        jar,
        Html(render_home(&state.content, &flash_banner(pending.as_ref()))),
    )
}

/// Footer shared across all pages; built from the profile rather than a static
/// fragment so contact details live in one place.
pub fn footer_html(profile: &LabProfile) -> String {
    let certifications: String = profile
        .certifications
        .iter()
        .map(|c| format!("<li>{c}</li>"))
        .collect();

    format!(
        r#"<footer class="footer">
    <div class="container footer-grid">
        <div>
            <h3>{}</h3>
            <p>{}</p>
        </div>
        <div>
            <h4>Contact</h4>
            <p>{}</p>
            <p>Phone: {}</p>
            <p>Emergency: {}</p>
            <p>Email: {}</p>
        </div>
        <div>
            <h4>Hours</h4>
            <p>Mon-Fri: {}</p>
            <p>Saturday: {}</p>
            <p>Sunday: {}</p>
        </div>
        <div>
            <h4>Certifications</h4>
            <ul class="footer-certs">{}</ul>
        </div>
    </div>
    <div class="container footer-note">
        <p>&copy; {} — Serving the community since {}.</p>
    </div>
</footer>"#,
        profile.name,
        profile.tagline,
        profile.contact.address,
        profile.contact.phone,
        profile.contact.emergency,
        profile.contact.email,
        profile.contact.hours.weekdays,
        profile.contact.hours.saturday,
        profile.contact.hours.sunday,
        certifications,
        profile.name,
        profile.established,
    )
}

fn render_home(content: &SiteContent, flash_html: &str) -> String {
    let profile = content.profile();

    let service_cards: String = content
        .services()
        .iter()
        .map(|s| {
            format!(
                r#"
            <a class="service-card" href="/services/{}">
                <div class="service-icon">{}</div>
                <h3>{}</h3>
                <p>{}</p>
                <span class="card-link">Learn more →</span>
            </a>"#,
                s.id, s.icon, s.name, s.description
            )
        })
        .collect();

    let team_cards: String = content
        .team()
        .iter()
        .map(|m| {
            format!(
                r#"
            <div class="team-card">
                <img src="/static/img/{}" alt="{}" loading="lazy">
                <h3>{}</h3>
                <p class="team-title">{}</p>
                <p class="team-credentials">{}</p>
            </div>"#,
                m.image, m.name, m.name, m.title, m.credentials
            )
        })
        .collect();

    let form_html = contact::contact_form_html(&ContactForm::default(), &ValidationErrors::default());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — {}</title>
    <meta name="description" content="{}">
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
{}
<main>
    <section class="hero">
        <div class="container">
            <h1>{}</h1>
            <p class="hero-tagline">{}</p>
            <p class="hero-description">{}</p>
            <div class="hero-actions">
                <a class="btn btn-primary" href="/contact">Request a Test</a>
                <a class="btn btn-outline" href="/services">Browse Services</a>
            </div>
        </div>
    </section>

    <section class="stats">
        <div class="container stats-grid">
            <div class="stat-card">
                <div class="stat-value" data-counter>{}</div>
                <div class="stat-label">Tests per Year</div>
            </div>
            <div class="stat-card">
                <div class="stat-value" data-counter>{}</div>
                <div class="stat-label">Accuracy Rate</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{}</div>
                <div class="stat-label">Turnaround Time</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">Since {}</div>
                <div class="stat-label">Trusted Experience</div>
            </div>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <h2 class="section-title">Our Diagnostic Services</h2>
            <div class="card-grid">{}</div>
        </div>
    </section>

    <section class="section section-alt">
        <div class="container">
            <h2 class="section-title">Meet Our Experts</h2>
            <div class="card-grid">{}</div>
            <p class="section-more"><a href="/team">Full team →</a></p>
        </div>
    </section>

    <section class="section" id="contact">
        <div class="container">
            <h2 class="section-title">Get in Touch</h2>
            {}
        </div>
    </section>
</main>
{}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        profile.name,
        profile.tagline,
        profile.description,
        NAV_HTML,
        flash_html,
        profile.name,
        profile.tagline,
        profile.description,
        profile.tests_per_year,
        profile.accuracy_rate,
        profile.turnaround_time,
        profile.established,
        service_cards,
        team_cards,
        form_html,
        footer_html(profile),
    )
}
