//! Compose form values and validation.

use serde::{Deserialize, Serialize};

use crate::recipients::Recipients;

/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Subject line.
    Subject,
    /// Email body.
    Description,
    /// Selected recipients.
    DestinationEmails,
}

/// Validation error for the compose form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Subject is empty.
    EmptySubject,
    /// Description is shorter than [`MIN_DESCRIPTION_CHARS`].
    DescriptionTooShort,
    /// No recipient selected.
    NoRecipients,
    /// A recipient is not a valid email address.
    InvalidEmail(String),
}

impl FieldError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptySubject => "Subject is required.",
            Self::DescriptionTooShort => "Description must be at least 10 characters.",
            Self::NoRecipients => "At least one recipient email is required.",
            Self::InvalidEmail(_) => "Invalid email address.",
        }
    }

    /// Get the field this error relates to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptySubject => Field::Subject,
            Self::DescriptionTooShort => Field::Description,
            Self::NoRecipients | Self::InvalidEmail(_) => Field::DestinationEmails,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FieldError {}

/// Result of validating the form.
pub type ValidationResult = Result<EmailDraft, Vec<FieldError>>;

/// A validated snapshot of the form, ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    /// Subject line.
    pub subject: String,
    /// Email body.
    pub description: String,
    /// Recipients, in selection order.
    pub destination_emails: Vec<String>,
}

/// Editable compose form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    /// Subject line.
    pub subject: String,
    /// Email body.
    pub description: String,
    /// Selected recipients.
    pub destination_emails: Recipients,
}

impl ComposeForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every field.
    ///
    /// Returns the draft if valid, or all field errors. At most one error is
    /// reported for the recipient list (empty list, else the first invalid
    /// address).
    ///
    /// # Errors
    ///
    /// Returns a vector of `FieldError` if any field is invalid.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.subject.is_empty() {
            errors.push(FieldError::EmptySubject);
        }

        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError::DescriptionTooShort);
        }

        if self.destination_emails.is_empty() {
            errors.push(FieldError::NoRecipients);
        } else if let Some(bad) = self.destination_emails.iter().find(|e| !is_valid_email(e)) {
            errors.push(FieldError::InvalidEmail(bad.to_string()));
        }

        if errors.is_empty() {
            Ok(self.to_draft())
        } else {
            Err(errors)
        }
    }

    /// Snapshot of the current values, without validation.
    #[must_use]
    pub fn to_draft(&self) -> EmailDraft {
        EmailDraft {
            subject: self.subject.clone(),
            description: self.description.clone(),
            destination_emails: self.destination_emails.as_slice().to_vec(),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Basic email validation.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    // Must contain exactly one @, no whitespace
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must contain at least one dot and no empty labels
    if !domain.contains('.') {
        return false;
    }
    !domain.split('.').any(str::is_empty)
}
