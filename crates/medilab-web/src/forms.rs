//! Contact form: raw field capture, validation, field-level error annotations.

use std::sync::LazyLock;

use medilab_content::ServiceCategory;
use medilab_mailer::ContactSubmission;
use regex::Regex;
use serde::Deserialize;

/// Deliberately permissive: local part, @, domain with at least one dot.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Raw form fields exactly as posted. Every field defaults to empty so a
/// partial POST still deserializes and gets annotated instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// One message slot per field; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub service: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.service.is_none()
            && self.message.is_none()
    }
}

impl ContactForm {
    /// Checks every field and either produces a submission or the full set of
    /// per-field annotations. Lengths are in characters, not bytes.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name_len = self.name.chars().count();
        if !(2..=100).contains(&name_len) {
            errors.name = Some("Full name must be between 2 and 100 characters.");
        }

        if self.email.is_empty() || !EMAIL_PATTERN.is_match(&self.email) {
            errors.email = Some("Enter a valid email address.");
        }

        if self.phone.chars().count() > 20 {
            errors.phone = Some("Phone number must be 20 characters or fewer.");
        }

        let service = ServiceCategory::from_slug(&self.service);
        if service.is_none() {
            errors.service = Some("Select a valid service.");
        }

        let message_len = self.message.chars().count();
        if !(10..=1000).contains(&message_len) {
            errors.message = Some("Message must be between 10 and 1000 characters.");
        }

        match service {
            Some(service) if errors.is_empty() => Ok(ContactSubmission {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                service,
                message: self.message.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            service: "hematology".to_string(),
            message: "Please schedule a CBC test for me next week.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_submission() {
        let submission = valid_form().validate().expect("valid");
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.service, ServiceCategory::Hematology);
        assert_eq!(submission.phone, "");
    }

    #[test]
    fn test_name_length_bounds() {
        let mut form = valid_form();
        form.name = "J".to_string();
        assert!(form.validate().unwrap_err().name.is_some());

        form.name = "J".repeat(101);
        assert!(form.validate().unwrap_err().name.is_some());

        form.name = "Jo".to_string();
        assert!(form.validate().is_ok());

        form.name = "J".repeat(100);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_email_syntax() {
        let mut form = valid_form();
        for bad in ["", "not-an-email", "a@b", "a b@example.com", "a@b c.com"] {
            form.email = bad.to_string();
            assert!(
                form.validate().unwrap_err().email.is_some(),
                "accepted {bad:?}"
            );
        }
        form.email = "nurse.station+lab@hospital.org".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_phone_is_optional_but_bounded() {
        let mut form = valid_form();
        form.phone = String::new();
        assert!(form.validate().is_ok());

        form.phone = "5".repeat(20);
        assert!(form.validate().is_ok());

        form.phone = "5".repeat(21);
        assert!(form.validate().unwrap_err().phone.is_some());
    }

    #[test]
    fn test_service_must_be_known() {
        let mut form = valid_form();
        form.service = "radiology".to_string();
        assert!(form.validate().unwrap_err().service.is_some());

        form.service = String::new();
        assert!(form.validate().unwrap_err().service.is_some());

        for slug in ["general", "urgent", "clinical-chemistry"] {
            form.service = slug.to_string();
            assert!(form.validate().is_ok(), "rejected {slug:?}");
        }
    }

    #[test]
    fn test_message_length_bounds() {
        let mut form = valid_form();
        form.message = "too short".to_string(); // 9 chars
        assert!(form.validate().unwrap_err().message.is_some());

        form.message = "m".repeat(10);
        assert!(form.validate().is_ok());

        form.message = "m".repeat(1000);
        assert!(form.validate().is_ok());

        form.message = "m".repeat(1001);
        assert!(form.validate().unwrap_err().message.is_some());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut form = valid_form();
        // Two chars, four bytes.
        form.name = "Åé".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_multiple_failures_annotate_every_field() {
        let form = ContactForm::default();
        let errors = form.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.service.is_some());
        assert!(errors.message.is_some());
        assert!(errors.phone.is_none());
    }
}
