use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name must be at most 50 characters")]
    NameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,
    #[error("Email must be at most 100 characters")]
    EmailTooLong,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message must be at most 1000 characters")]
    MessageTooLong,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = [self.name, self.email, self.message]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn check_length(
    value: &str,
    min: usize,
    max: usize,
    required: FieldError,
    short: FieldError,
    long: FieldError,
) -> Option<FieldError> {
    let len = value.chars().count();
    if len == 0 {
        Some(required)
    } else if len < min {
        Some(short)
    } else if len > max {
        Some(long)
    } else {
        None
    }
}

impl ContactMessage {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let msg = self.trimmed();
        let email = if msg.email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if msg.email.chars().count() > EMAIL_MAX {
            Some(FieldError::EmailTooLong)
        } else if !EMAIL_PATTERN.is_match(&msg.email) {
            Some(FieldError::EmailInvalid)
        } else {
            None
        };
        let errors = FieldErrors {
            name: check_length(
                &msg.name,
                NAME_MIN,
                NAME_MAX,
                FieldError::NameRequired,
                FieldError::NameTooShort,
                FieldError::NameTooLong,
            ),
            email,
            message: check_length(
                &msg.message,
                MESSAGE_MIN,
                MESSAGE_MAX,
                FieldError::MessageRequired,
                FieldError::MessageTooShort,
                FieldError::MessageTooLong,
            ),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn resolve<E>(pending: bool, outcome: Option<&Result<(), E>>) -> Self {
        match (pending, outcome) {
            (true, _) => Self::Submitting,
            (false, Some(Ok(()))) => Self::Sent,
            (false, Some(Err(_))) => Self::Failed,
            (false, None) => Self::Idle,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Sent => "Sent Successfully",
            Self::Failed => "Error Sending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I'd like a new landing page.".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_empty_message_reports_every_field() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.message, Some(FieldError::MessageRequired));
        assert_eq!(
            errors.to_string(),
            "Name is required; Email is required; Message is required"
        );
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let msg = ContactMessage {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(
            msg.validate().unwrap_err().name,
            Some(FieldError::NameRequired)
        );
    }

    #[test]
    fn test_email_pattern() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let msg = ContactMessage {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(
                msg.validate().unwrap_err().email,
                Some(FieldError::EmailInvalid),
                "{bad}"
            );
        }
        let msg = ContactMessage {
            email: "  ada@example.co.uk ".to_string(),
            ..valid()
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_length_limits() {
        let msg = ContactMessage {
            name: "A".to_string(),
            message: "Too short".to_string(),
            ..valid()
        };
        let errors = msg.validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.message, Some(FieldError::MessageTooShort));
        assert_eq!(errors.email, None);

        let msg = ContactMessage {
            name: "n".repeat(NAME_MAX + 1),
            email: format!("{}@example.com", "e".repeat(EMAIL_MAX)),
            message: "m".repeat(MESSAGE_MAX + 1),
        };
        let errors = msg.validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooLong));
        assert_eq!(errors.email, Some(FieldError::EmailTooLong));
        assert_eq!(errors.message, Some(FieldError::MessageTooLong));
    }

    #[test]
    fn test_lengths_count_characters() {
        let msg = ContactMessage {
            name: "Zoë".to_string(),
            message: "Привет, мир!".to_string(),
            ..valid()
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_form_status() {
        let ok: Result<(), String> = Ok(());
        let err: Result<(), String> = Err("boom".to_string());
        assert_eq!(FormStatus::resolve::<String>(false, None), FormStatus::Idle);
        assert_eq!(FormStatus::resolve(true, Some(&ok)), FormStatus::Submitting);
        assert_eq!(FormStatus::resolve(false, Some(&ok)), FormStatus::Sent);
        assert_eq!(FormStatus::resolve(false, Some(&err)), FormStatus::Failed);
        assert_eq!(FormStatus::Submitting.label(), "Sending...");
    }
}
