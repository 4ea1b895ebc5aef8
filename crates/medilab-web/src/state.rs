//! Shared application state injected into every handler.

use std::ops::Deref;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use medilab_content::SiteContent;
use medilab_mailer::Mailer;
use sha2::{Digest, Sha512};

pub struct AppState {
    pub content: SiteContent,
    pub mailer: Mailer,
    key: Key,
}

impl AppState {
    pub fn new(content: SiteContent, mailer: Mailer, secret_key: &str) -> Self {
        Self {
            content,
            mailer,
            key: signing_key(secret_key),
        }
    }
}

/// Cheap-to-clone handle on the process-wide state.
#[derive(Clone)]
pub struct SharedState(Arc<AppState>);

impl SharedState {
    pub fn new(state: AppState) -> Self {
        Self(Arc::new(state))
    }
}

impl Deref for SharedState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.0
    }
}

impl FromRef<SharedState> for Key {
    fn from_ref(state: &SharedState) -> Key {
        state.0.key.clone()
    }
}

/// Stretches an arbitrary-length secret into the 64 bytes a cookie `Key`
/// requires.
fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(&digest[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_is_deterministic() {
        let a = signing_key("medilab-dev-secret");
        let b = signing_key("medilab-dev-secret");
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn test_short_secrets_still_produce_a_key() {
        // Key::from needs 64 bytes; the digest guarantees that even for "x".
        let key = signing_key("x");
        assert_eq!(key.master().len(), 64);
    }
}
