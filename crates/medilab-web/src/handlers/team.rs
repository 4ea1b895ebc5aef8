//! Team roster page.

use axum::{extract::State, response::Html};

use crate::handlers::home::{footer_html, NAV_HTML};
use crate::state::SharedState;
use medilab_content::SiteContent;

pub async fn team_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_team(&state.content))
}

fn render_team(content: &SiteContent) -> String {
    let profile = content.profile();

    let cards: String = content
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
                <p class="team-meta">{} · {}</p>
            </div>"#,
                m.image, m.name, m.name, m.title, m.credentials, m.experience, m.specialization
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Our Team — {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main>
    <section class="page-hero">
        <div class="container">
            <h1>Meet Our Experts</h1>
            <p>Board-certified pathologists and technologists behind every result.</p>
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
        cards,
        footer_html(profile),
    )
}
