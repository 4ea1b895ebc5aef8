//! Environment-sourced configuration. Every setting is optional with a
//! default. `MAIL_USERNAME` is the one that changes behavior: without it the
//! contact handler skips email dispatch entirely.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use medilab_mailer::SmtpConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Secret for flash-cookie signing.
    pub secret_key: String,
    pub mail: SmtpConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: var("HOST")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_host),
            port: var("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_port),
            secret_key: var("SECRET_KEY").unwrap_or_else(default_secret_key),
            mail: SmtpConfig {
                server: var("MAIL_SERVER").unwrap_or_else(default_mail_server),
                port: var("MAIL_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_mail_port),
                use_tls: var("MAIL_USE_TLS")
                    .as_deref()
                    .and_then(parse_bool)
                    .unwrap_or(true),
                username: var("MAIL_USERNAME"),
                password: var("MAIL_PASSWORD"),
                default_sender: var("MAIL_DEFAULT_SENDER"),
            },
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Unset and empty variables are treated the same.
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}
fn default_port() -> u16 {
    5000
}
fn default_secret_key() -> String {
    "medilab-dev-secret".to_string()
}
fn default_mail_server() -> String {
    "smtp.gmail.com".to_string()
}
fn default_mail_port() -> u16 {
    587
}
