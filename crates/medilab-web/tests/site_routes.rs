//! End-to-end route tests driving the full router with mock mail transports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

use medilab_content::SiteContent;
use medilab_mailer::{MailTransport, Mailer, MailerError, OutgoingEmail};
use medilab_web::router::build_router;
use medilab_web::state::AppState;

const SECRET: &str = "integration-test-secret";

const VALID_BODY: &str = "name=Jane+Doe&email=jane%40example.com&phone=&service=hematology\
                          &message=Please+schedule+a+CBC+test+for+me+next+week.";

struct RecordingTransport {
    delivered: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, email: &OutgoingEmail, _from: &str) -> Result<(), MailerError> {
        self.delivered.lock().unwrap().push(email.clone());
        Ok(())
    }
}

struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn deliver(&self, _email: &OutgoingEmail, _from: &str) -> Result<(), MailerError> {
        Err(MailerError::Dispatch("connection refused".to_string()))
    }
}

fn app_with(mailer: Mailer) -> Router {
    build_router(AppState::new(SiteContent::new(), mailer, SECRET))
}

fn recording_app() -> (Router, Arc<RecordingTransport>) {
    let recorder = Arc::new(RecordingTransport {
        delivered: Mutex::new(Vec::new()),
    });
    let mailer = Mailer::with_transport(recorder.clone(), "noreply@medilabpro.com");
    (app_with(mailer), recorder)
}

async fn get(app: &Router, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_with_cookie(app: &Router, path: &str, cookie: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_form(app: &Router, path: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// "name=value" part of the Set-Cookie header, for replay on the next request.
fn flash_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie present")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn home_page_renders_profile_and_services() {
    let (app, _) = recording_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("MediLab Pro"));
    assert!(body.contains("Advanced Medical Diagnostics"));
    assert!(body.contains("Hematology"));
    assert!(body.contains("Dr. Sarah Johnson"));
    // The embedded contact form starts blank.
    assert!(body.contains(r#"name="name" value="""#));
}

#[tokio::test]
async fn services_page_lists_full_catalog() {
    let (app, _) = recording_app();
    let body = body_text(get(&app, "/services").await).await;
    for name in [
        "Clinical Chemistry",
        "Molecular Diagnostics",
        "Microbiology",
        "Hematology",
        "Immunology",
        "Pathology",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn service_detail_shows_tests() {
    let (app, _) = recording_app();
    let response = get(&app, "/services/hematology").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("CBC with Differential"));
    assert!(body.contains("Hemoglobin Electrophoresis"));
}

#[tokio::test]
async fn unknown_service_redirects_to_catalog_with_warning() {
    let (app, _) = recording_app();
    let response = get(&app, "/services/unknown-id").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/services");

    let cookie = flash_cookie(&response);
    let body = body_text(get_with_cookie(&app, "/services", &cookie).await).await;
    assert!(body.contains("Service not found."));
}

#[tokio::test]
async fn team_page_renders_roster() {
    let (app, _) = recording_app();
    let body = body_text(get(&app, "/team").await).await;
    for name in [
        "Dr. Sarah Johnson",
        "Dr. Michael Chen",
        "Dr. Emily Rodriguez",
        "Dr. David Park",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn about_page_renders_certifications() {
    let (app, _) = recording_app();
    let body = body_text(get(&app, "/about").await).await;
    assert!(body.contains("CAP Accredited"));
    assert!(body.contains("ISO 15189:2012"));
    assert!(body.contains("Since 1985") || body.contains("1985"));
}

#[tokio::test]
async fn contact_page_renders_blank_form() {
    let (app, _) = recording_app();
    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"name="name" value="""#));
    assert!(body.contains("General Inquiry"));
    assert!(body.contains("Urgent Test Request"));
}

#[tokio::test]
async fn short_name_is_rejected_without_dispatch() {
    let (app, recorder) = recording_app();
    let body = "name=J&email=jane%40example.com&phone=&service=hematology\
                &message=Please+schedule+a+CBC+test.";
    let response = post_form(&app, "/contact", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("between 2 and 100"));
    // Entered values survive the round trip.
    assert!(html.contains("jane@example.com"));
    assert!(recorder.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_email_is_rejected_without_dispatch() {
    let (app, recorder) = recording_app();
    let body = "name=Jane+Doe&email=not-an-email&phone=&service=hematology\
                &message=Please+schedule+a+CBC+test.";
    let html = body_text(post_form(&app, "/contact", body).await).await;
    assert!(html.contains("Enter a valid email address."));
    assert!(recorder.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn short_message_is_rejected_without_dispatch() {
    let (app, recorder) = recording_app();
    let body = "name=Jane+Doe&email=jane%40example.com&phone=&service=hematology\
                &message=too+short";
    let html = body_text(post_form(&app, "/contact", body).await).await;
    assert!(html.contains("between 10 and 1000"));
    assert!(recorder.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn valid_submission_dispatches_two_messages_and_redirects() {
    let (app, recorder) = recording_app();
    let response = post_form(&app, "/contact", VALID_BODY).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/contact");

    let delivered = recorder.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].to, "info@medilabpro.com");
    assert!(delivered[0].subject.contains("hematology"));
    assert!(delivered[0].body.contains("Name: Jane Doe"));
    assert_eq!(delivered[1].to, "jane@example.com");
    assert!(delivered[1].body.contains("Dear Jane Doe"));
}

#[tokio::test]
async fn success_flash_shows_once_then_form_is_blank() {
    let (app, _) = recording_app();
    let response = post_form(&app, "/contact", VALID_BODY).await;
    let cookie = flash_cookie(&response);

    // Following the redirect shows the flash and a blank form.
    let follow = get_with_cookie(&app, "/contact", &cookie).await;
    let html = body_text(follow).await;
    assert!(html.contains("Thank you for your message!"));
    assert!(!html.contains("Jane Doe"));

    // A fresh GET (post/redirect/get) has neither flash nor values.
    let html = body_text(get(&app, "/contact").await).await;
    assert!(!html.contains("Thank you for your message!"));
    assert!(!html.contains("Jane Doe"));
}

#[tokio::test]
async fn missing_credentials_skip_dispatch_but_still_succeed() {
    let app = app_with(Mailer::unconfigured());
    let response = post_form(&app, "/contact", VALID_BODY).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/contact");
}

#[tokio::test]
async fn transport_failure_shows_generic_error_and_keeps_values() {
    let app = app_with(Mailer::with_transport(
        Arc::new(FailingTransport),
        "noreply@medilabpro.com",
    ));
    let response = post_form(&app, "/contact", VALID_BODY).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("There was an error sending your message."));
    assert!(html.contains("Jane Doe"));
    // The underlying cause never reaches the page.
    assert!(!html.contains("connection refused"));
}

#[tokio::test]
async fn unmatched_path_renders_404() {
    let (app, _) = recording_app();
    let response = get(&app, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("Page Not Found"));
}
