//! medilab-web — MediLab Pro marketing site.
//! Serves the static marketing pages plus the one dynamic feature:
//!   - Home, services, service detail, team, about pages
//!   - Contact form with validation, staff notification, submitter confirmation
//!   - Flash messages over a signed cookie (post/redirect/get)
//!   - 404 fallback and generic 500 page

pub mod config;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod state;
