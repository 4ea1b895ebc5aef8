//! Contact page and submission handler: validate, compose, conditionally
//! dispatch, then redirect with a flash (post/redirect/get).

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::SignedCookieJar;
use tracing::{error, info};

use crate::flash::{self, Flash};
use crate::forms::{ContactForm, ValidationErrors};
use crate::handlers::home::{footer_html, NAV_HTML};
use crate::handlers::{escape_html, flash_banner};
use crate::state::SharedState;
use medilab_content::{ServiceCategory, SiteContent};
use medilab_mailer::DispatchOutcome;

const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We will get back to you within 24 hours.";
const DISPATCH_FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again or call us directly.";

pub async fn contact_page(
    State(state): State<SharedState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, pending) = flash::take(jar);
    (
        jar,
        Html(render_contact(
            &state.content,
            &ContactForm::default(),
            &ValidationErrors::default(),
            &flash_banner(pending.as_ref()),
        )),
    )
}

pub async fn contact_submit(
    State(state): State<SharedState>,
    jar: SignedCookieJar,
    Form(form): Form<ContactForm>,
) -> Response {
    let submission = match form.validate() {
        Ok(submission) => submission,
        // Validation failure: no side effects, same form back with the entered
        // values and field annotations.
        Err(errors) => {
            return Html(render_contact(&state.content, &form, &errors, "")).into_response();
        }
    };

    match state
        .mailer
        .dispatch_contact(&submission, state.content.profile())
        .await
    {
        Ok(outcome) => {
            if outcome == DispatchOutcome::Skipped {
                info!(
                    service = submission.service.slug(),
                    "contact submission accepted without email dispatch"
                );
            }
            let jar = flash::set(jar, &Flash::success(SUCCESS_MESSAGE));
            (jar, Redirect::to("/contact")).into_response()
        }
        Err(err) => {
            // Full cause goes to the server log only; the user gets the
            // generic apology with the entered values intact.
            error!(error = %err, "contact email dispatch failed");
            let banner = flash_banner(Some(&Flash::error(DISPATCH_FAILURE_MESSAGE)));
            Html(render_contact(
                &state.content,
                &form,
                &ValidationErrors::default(),
                &banner,
            ))
            .into_response()
        }
    }
}

/// The form fragment, shared with the home page's contact section. Entered
/// values are escaped and re-rendered; error slots render inline.
pub fn contact_form_html(form: &ContactForm, errors: &ValidationErrors) -> String {
    let options: String = ServiceCategory::ALL
        .iter()
        .map(|category| {
            let selected = if form.service == category.slug() {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                category.slug(),
                selected,
                category.label()
            )
        })
        .collect();

    format!(
        r#"<form class="contact-form" action="/contact" method="post" novalidate>
    <div class="form-row">
        <div class="form-group">
            <label for="name">Full Name</label>
            <input type="text" id="name" name="name" value="{name}" maxlength="100" required>
            {name_error}
        </div>
        <div class="form-group">
            <label for="email">Email Address</label>
            <input type="email" id="email" name="email" value="{email}" required>
            {email_error}
        </div>
    </div>
    <div class="form-row">
        <div class="form-group">
            <label for="phone">Phone Number <span class="optional">(optional)</span></label>
            <input type="tel" id="phone" name="phone" value="{phone}" maxlength="20">
            {phone_error}
        </div>
        <div class="form-group">
            <label for="service">Service of Interest</label>
            <select id="service" name="service">{options}</select>
            {service_error}
        </div>
    </div>
    <div class="form-group">
        <label for="message">Message</label>
        <textarea id="message" name="message" rows="6" maxlength="1000" required>{message}</textarea>
        {message_error}
    </div>
    <button class="btn btn-primary" type="submit">Send Message</button>
</form>"#,
        name = escape_html(&form.name),
        name_error = field_error(errors.name),
        email = escape_html(&form.email),
        email_error = field_error(errors.email),
        phone = escape_html(&form.phone),
        phone_error = field_error(errors.phone),
        options = options,
        service_error = field_error(errors.service),
        message = escape_html(&form.message),
        message_error = field_error(errors.message),
    )
}

fn field_error(error: Option<&'static str>) -> String {
    match error {
        Some(message) => format!(r#"<span class="field-error">{message}</span>"#),
        None => String::new(),
    }
}

fn render_contact(
    content: &SiteContent,
    form: &ContactForm,
    errors: &ValidationErrors,
    flash_html: &str,
) -> String {
    let profile = content.profile();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Contact Us — {name}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
{flash}
<main>
    <section class="page-hero">
        <div class="container">
            <h1>Contact Us</h1>
            <p>Questions about a test or a result? We respond within 24 hours on business days.</p>
        </div>
    </section>

    <section class="section">
        <div class="container contact-layout">
            <aside class="contact-info">
                <h2>Visit or Call</h2>
                <p class="contact-line">{address}</p>
                <p class="contact-line">Phone: {phone}</p>
                <p class="contact-line">Emergency: {emergency}</p>
                <p class="contact-line">Email: {email}</p>
                <h3>Hours</h3>
                <ul class="hours-list">
                    <li><span>Mon-Fri</span> {weekdays}</li>
                    <li><span>Saturday</span> {saturday}</li>
                    <li><span>Sunday</span> {sunday}</li>
                </ul>
            </aside>
            <div class="contact-form-panel">
                {form}
            </div>
        </div>
    </section>
</main>
{footer}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        name = profile.name,
        nav = NAV_HTML,
        flash = flash_html,
        address = profile.contact.address,
        phone = profile.contact.phone,
        emergency = profile.contact.emergency,
        email = profile.contact.email,
        weekdays = profile.contact.hours.weekdays,
        saturday = profile.contact.hours.saturday,
        sunday = profile.contact.hours.sunday,
        form = contact_form_html(form, errors),
        footer = footer_html(profile),
    )
}
