//! Contact Form State
//!
//! Field values, inline errors and the submission state machine. The
//! contact section renders this through a `reactive_stores::Store`.

use std::sync::OnceLock;

use reactive_stores::Store;
use regex::Regex;

use crate::commands::SubmitError;
use crate::models::ContactMessage;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control `name`/`id`
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    let ok = match field {
        Field::Name => trimmed.chars().count() >= 2,
        Field::Email => email_pattern().is_match(trimmed),
        Field::Subject => trimmed.chars().count() >= 5,
        Field::Message => trimmed.chars().count() >= 10,
    };
    if ok {
        return Ok(());
    }
    Err(match field {
        Field::Name => FieldError::NameTooShort,
        Field::Email => FieldError::InvalidEmail,
        Field::Subject => FieldError::SubjectTooShort,
        Field::Message => FieldError::MessageTooShort,
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormField {
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_busy(self) -> bool {
        self == SubmissionState::Submitting
    }
}

/// What the user should be told once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitNotice {
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub submission: SubmissionState,
}

impl ContactForm {
    #[cfg(test)]
    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Typing clears the error without re-validating.
    pub fn input(&mut self, field: Field, value: String) {
        let slot = self.field_mut(field);
        slot.value = value;
        slot.error = None;
    }

    /// Validate one field and record its error.
    pub fn blur(&mut self, field: Field) -> bool {
        let slot = self.field_mut(field);
        match validate_field(field, &slot.value) {
            Ok(()) => {
                slot.error = None;
                true
            }
            Err(err) => {
                slot.error = Some(err.to_string());
                false
            }
        }
    }

    /// Validate every field; no short-circuit, so all errors show at once.
    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .iter()
            .fold(true, |valid, field| self.blur(*field) && valid)
    }

    #[cfg(test)]
    pub fn errors(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .iter()
            .filter_map(|field| self.field(*field).error.as_deref().map(|e| (*field, e)))
            .collect()
    }

    /// Start a submission: `Some(message)` if the form is valid and nothing
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.submission.is_busy() {
            return None;
        }
        if !self.validate_all() {
            return None;
        }
        self.submission = SubmissionState::Submitting;
        log::debug!("contact submission started");
        Some(ContactMessage {
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            subject: self.subject.value.trim().to_string(),
            message: self.message.value.trim().to_string(),
        })
    }

    /// Settle the in-flight submission. Success clears every field; either
    /// outcome passes through its result state and ends back at `Idle`.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> SubmitNotice {
        let notice = match outcome {
            Ok(()) => {
                for field in Field::ALL {
                    *self.field_mut(field) = FormField::default();
                }
                self.submission = SubmissionState::Succeeded;
                SubmitNotice::Sent
            }
            Err(err) => {
                self.submission = SubmissionState::Failed;
                log::warn!("contact submission failed: {}", err);
                SubmitNotice::Failed(err.to_string())
            }
        };
        log::debug!("contact submission {:?}, back to idle", self.submission);
        self.submission = SubmissionState::Idle;
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.input(Field::Name, name.to_string());
        form.input(Field::Email, email.to_string());
        form.input(Field::Subject, subject.to_string());
        form.input(Field::Message, message.to_string());
        form
    }

    #[test]
    fn test_all_fields_report_errors() {
        let mut form = filled("A", "bad", "hi", "short");
        assert!(form.begin_submit().is_none());
        let fields: Vec<Field> = form.errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(form.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_valid_form_submits() {
        let mut form = filled("Al", "a@b.co", "Hello there", "This is long enough");
        let message = form.begin_submit().expect("valid form");
        assert!(form.errors().is_empty());
        assert_eq!(form.submission, SubmissionState::Submitting);
        assert_eq!(message.email, "a@b.co");
        assert_eq!(message.subject, "Hello there");
    }

    #[test]
    fn test_validation_table() {
        let cases = [
            (Field::Name, " A ", false),
            (Field::Name, "Al", true),
            (Field::Email, "a@b", false),
            (Field::Email, "a b@c.d", false),
            (Field::Email, " user@example.com ", true),
            (Field::Subject, "  hi  ", false),
            (Field::Subject, "Hello", true),
            (Field::Message, "123456789", false),
            (Field::Message, "1234567890", true),
        ];
        for (field, value, ok) in cases {
            assert_eq!(validate_field(field, value).is_ok(), ok, "{:?} {:?}", field, value);
        }
    }

    #[test]
    fn test_input_clears_error_without_revalidating() {
        let mut form = ContactForm::default();
        assert!(!form.blur(Field::Email));
        assert_eq!(
            form.email.error.as_deref(),
            Some("Please enter a valid email address")
        );
        form.input(Field::Email, "still bad".to_string());
        assert_eq!(form.email.error, None);
        assert!(!form.blur(Field::Email));
        assert!(form.email.error.is_some());
    }

    #[test]
    fn test_no_second_submission_while_in_flight() {
        let mut form = filled("Al", "a@b.co", "Hello there", "This is long enough");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled("Al", "a@b.co", "Hello there", "This is long enough");
        form.begin_submit();
        assert_eq!(form.finish_submit(Ok(())), SubmitNotice::Sent);
        assert_eq!(form.submission, SubmissionState::Idle);
        for field in Field::ALL {
            assert_eq!(form.field(field), &FormField::default());
        }
    }

    #[test]
    fn test_resubmit_after_success_starts_from_idle() {
        let mut form = filled("Al", "a@b.co", "Hello there", "This is long enough");
        form.begin_submit();
        form.finish_submit(Ok(()));

        // Fields were cleared, so a blind resubmit is rejected without leaving idle.
        assert!(form.begin_submit().is_none());
        assert_eq!(form.submission, SubmissionState::Idle);

        form.input(Field::Name, "Bo".to_string());
        form.input(Field::Email, "b@c.io".to_string());
        form.input(Field::Subject, "Second note".to_string());
        form.input(Field::Message, "Another long message".to_string());
        assert!(form.begin_submit().is_some());
        assert_eq!(form.submission, SubmissionState::Submitting);
    }

    #[test]
    fn test_failure_keeps_fields_and_allows_retry() {
        let mut form = filled("Al", "a@b.co", "Hello there", "This is long enough");
        form.begin_submit();
        let notice = form.finish_submit(Err(SubmitError::Rejected("offline".to_string())));
        assert!(matches!(notice, SubmitNotice::Failed(_)));
        assert_eq!(form.submission, SubmissionState::Idle);
        assert_eq!(form.name.value, "Al");
        assert!(form.begin_submit().is_some());
        assert_eq!(form.submission, SubmissionState::Submitting);
    }
}
