//! HTTP handlers for all site routes.

pub mod about;
pub mod contact;
pub mod errors;
pub mod home;
pub mod services;
pub mod team;

use crate::flash::Flash;

/// Minimal HTML escaping for user-supplied text echoed back into a page.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Dismissible status banner, or nothing when no flash is pending.
pub fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => format!(
            r#"<div class="flash {}" role="alert">
    <span>{}</span>
    <button class="flash-close" type="button" aria-label="Dismiss">&times;</button>
</div>"#,
            flash.level.css_class(),
            escape_html(&flash.message),
        ),
        None => String::new(),
    }
}
