//! One-shot status messages carried across a redirect in a signed cookie.
//! Written on redirect, read-and-cleared on the next page render.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde::{Deserialize, Serialize};

const FLASH_COOKIE: &str = "medilab_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    /// CSS modifier on the rendered banner.
    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "flash-success",
            FlashLevel::Error => "flash-error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

pub fn set(jar: SignedCookieJar, flash: &Flash) -> SignedCookieJar {
    let payload = serde_json::to_string(flash).unwrap_or_default();
    jar.add(
        Cookie::build((FLASH_COOKIE, payload))
            .path("/")
            .http_only(true),
    )
}

/// Reads the pending flash, if any, and clears it from the jar.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok());
    let mut removal = Cookie::from(FLASH_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), flash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn test_set_then_take_round_trips() {
        let jar = SignedCookieJar::new(Key::generate());
        let jar = set(jar, &Flash::success("Thank you for your message!"));

        let (jar, flash) = take(jar);
        let flash = flash.expect("flash present");
        assert_eq!(flash.level, FlashLevel::Success);
        assert_eq!(flash.message, "Thank you for your message!");

        // Cleared after the first read.
        let (_, again) = take(jar);
        assert!(again.is_none());
    }

    #[test]
    fn test_take_on_empty_jar_is_none() {
        let jar = SignedCookieJar::new(Key::generate());
        let (_, flash) = take(jar);
        assert!(flash.is_none());
    }
}
