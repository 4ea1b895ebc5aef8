//! Composition of the two outbound messages produced by a contact submission.

use chrono::{DateTime, Local};
use medilab_content::{LabProfile, ServiceCategory};

/// A validated contact-form submission. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// May be empty; the field is optional on the form.
    pub phone: String,
    pub service: ServiceCategory,
    pub message: String,
}

/// A composed plain-text email, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Notification to lab staff. Carries every submitted field plus the
/// server-side receipt time.
pub fn staff_notification(
    submission: &ContactSubmission,
    profile: &LabProfile,
    submitted_at: DateTime<Local>,
) -> OutgoingEmail {
    OutgoingEmail {
        to: profile.contact.email.to_string(),
        subject: format!(
            "New Contact Form Submission - {}",
            submission.service.slug()
        ),
        body: format!(
            "New contact form submission:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Service: {}\n\
             Message: {}\n\
             \n\
             Submitted at: {}\n",
            submission.name,
            submission.email,
            submission.phone,
            submission.service.slug(),
            submission.message,
            submitted_at.format("%Y-%m-%d %H:%M:%S"),
        ),
    }
}

/// Confirmation back to the submitter, with the 24-business-hour response
/// commitment and the emergency line for urgent cases.
pub fn submitter_confirmation(
    submission: &ContactSubmission,
    profile: &LabProfile,
) -> OutgoingEmail {
    OutgoingEmail {
        to: submission.email.clone(),
        subject: format!("Thank you for contacting {}", profile.name),
        body: format!(
            "Dear {},\n\
             \n\
             Thank you for contacting {}. We have received your inquiry regarding {}.\n\
             \n\
             Our team will review your message and respond within 24 hours during business days.\n\
             \n\
             If you have an urgent request, please call us at {}.\n\
             \n\
             Best regards,\n\
             {} Team\n",
            submission.name,
            profile.name,
            submission.service.label(),
            profile.contact.emergency,
            profile.name,
        ),
    }
}
