//! Contact form validation.
//!
//! Client-side only: required fields get an inline message when left
//! empty, the whole submission gets a global status line, and delivery is
//! handed off to the form's declared mechanism once validation passes.

/// Global status shown when validation fails.
pub const REJECTION_TEXT: &str = "Please fix the errors above before sending.";

/// Global status shown while delivery is handed off.
pub const IN_PROGRESS_TEXT: &str = "Validating and preparing your message...";

/// Visual tone of the global status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Validation failed, submission suppressed
    Error,
    /// Validation passed, delivery in progress
    Advisory,
}

/// Global form status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub tone: StatusTone,
    pub text: String,
}

impl FormStatus {
    fn rejection() -> Self {
        Self {
            tone: StatusTone::Error,
            text: REJECTION_TEXT.to_string(),
        }
    }

    fn in_progress() -> Self {
        Self {
            tone: StatusTone::Advisory,
            text: IN_PROGRESS_TEXT.to_string(),
        }
    }
}

/// One form field with its current value and inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Stable field name used in messages and lookups ("name", "email", ...)
    pub name: &'static str,
    /// Human label shown next to the input
    pub label: &'static str,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

impl Field {
    fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            value: String::new(),
            error: None,
        }
    }

    fn required_message(&self) -> String {
        format!("The {} field is required.", self.name)
    }
}

/// Contact form model: field values, inline errors, global status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    pub status: Option<FormStatus>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: vec![
                Field::new("name", "Name"),
                Field::new("email", "Email"),
                Field::new("message", "Message"),
            ],
            status: None,
        }
    }
}

impl ContactForm {
    /// Update one field from an input event.
    ///
    /// A value that trims to non-empty clears that field's inline error on
    /// the spot. Typing while the global status shows an error clears the
    /// global status too, regardless of which field was touched.
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            if !value.trim().is_empty() {
                field.error = None;
            }
            field.value = value;
        }
        if matches!(
            self.status,
            Some(FormStatus {
                tone: StatusTone::Error,
                ..
            })
        ) {
            self.status = None;
        }
    }

    /// Validate every required field and set the global status.
    ///
    /// Returns `true` when the submission may proceed to delivery.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            if field.required && field.value.trim().is_empty() {
                field.error = Some(field.required_message());
                valid = false;
            } else {
                field.error = None;
            }
        }

        self.status = Some(if valid {
            FormStatus::in_progress()
        } else {
            FormStatus::rejection()
        });
        valid
    }

    /// Lookup a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// True when any field carries an inline error.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// `mailto:` URL carrying the form's values, the declared delivery
    /// mechanism of the contact form.
    pub fn mailto(&self, recipient: &str) -> String {
        let subject = self
            .field("name")
            .map(|f| f.value.trim())
            .filter(|v| !v.is_empty())
            .map(|name| format!("Contact from {name}"))
            .unwrap_or_else(|| "Contact".to_string());
        let body = self
            .field("message")
            .map(|f| f.value.as_str())
            .unwrap_or_default();
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencode(&subject),
            urlencode(body)
        )
    }
}

/// Minimal percent-encoding for mailto query components.
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_field_rejects() {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada".to_string());
        form.set_value("message", "Hello".to_string());

        assert!(!form.validate());

        let email = form.field("email").unwrap();
        assert_eq!(email.error.as_deref(), Some("The email field is required."));
        let status = form.status.clone().unwrap();
        assert_eq!(status.tone, StatusTone::Error);
        assert_eq!(status.text, REJECTION_TEXT);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = ContactForm::default();
        form.set_value("name", "   ".to_string());
        assert!(!form.validate());
        assert!(form.field("name").unwrap().error.is_some());
    }

    #[test]
    fn test_all_fields_populated_passes() {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada".to_string());
        form.set_value("email", "ada@example.com".to_string());
        form.set_value("message", "Hello there".to_string());

        assert!(form.validate());
        assert!(!form.has_errors());
        let status = form.status.clone().unwrap();
        assert_eq!(status.tone, StatusTone::Advisory);
        assert_eq!(status.text, IN_PROGRESS_TEXT);
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = ContactForm::default();
        assert!(!form.validate());
        assert!(form.field("name").unwrap().error.is_some());

        form.set_value("name", "A".to_string());
        assert!(form.field("name").unwrap().error.is_none());
    }

    #[test]
    fn test_typing_clears_error_status_only() {
        let mut form = ContactForm::default();
        assert!(!form.validate());
        assert!(form.status.is_some());

        form.set_value("email", "a@b.c".to_string());
        assert!(form.status.is_none());

        // Advisory status is left alone
        form.set_value("name", "Ada".to_string());
        form.set_value("message", "hi".to_string());
        assert!(form.validate());
        form.set_value("message", "hi again".to_string());
        assert_eq!(form.status.clone().unwrap().tone, StatusTone::Advisory);
    }

    #[test]
    fn test_typing_whitespace_keeps_field_error() {
        let mut form = ContactForm::default();
        assert!(!form.validate());
        form.set_value("name", "  ".to_string());
        assert!(form.field("name").unwrap().error.is_some());
    }

    #[test]
    fn test_revalidation_clears_stale_errors() {
        let mut form = ContactForm::default();
        assert!(!form.validate());
        form.fields
            .iter_mut()
            .for_each(|f| f.value = "filled".to_string());
        assert!(form.validate());
        assert!(!form.has_errors());
    }

    #[test]
    fn test_mailto_encodes_values() {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada Lovelace".to_string());
        form.set_value("message", "Hi & hello".to_string());
        let url = form.mailto("studio@example.com");
        assert!(url.starts_with("mailto:studio@example.com?subject=Contact%20from%20Ada%20Lovelace"));
        assert!(url.ends_with("&body=Hi%20%26%20hello"));
    }
}
