//! MediLab Pro Web Server
//!
//! Run with: cargo run -p medilab-web

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use medilab_content::SiteContent;
use medilab_mailer::Mailer;
use medilab_web::config::Config;
use medilab_web::router::build_router;
use medilab_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let content = SiteContent::new();
    let mailer = Mailer::from_config(&config.mail)?;
    if !mailer.is_configured() {
        warn!("MAIL_USERNAME not set; contact submissions will be accepted without sending email");
    }

    let state = AppState::new(content, mailer, &config.secret_key);
    let app = build_router(state);

    let addr = config.bind_addr();
    info!("MediLab Pro site listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
