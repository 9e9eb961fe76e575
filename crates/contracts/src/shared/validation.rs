//! Field validation shared by the login, signup and contact forms

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Message,
}

impl FormField {
    /// DOM id / form name of the input
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
            FormField::Message => "message",
        }
    }
}

/// Field name -> message. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Record the outcome of a single-field check
    pub fn check(&mut self, field: FormField, result: Result<(), String>) {
        if let Err(message) = result {
            self.set(field, message);
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    validate_required(email, "Email is required")?;
    if !is_valid_email(email) {
        return Err("Please enter a valid email".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    validate_required(password, "Password is required")?;
    // Length in UTF-16 code units, as the browser reports it for the input
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

/// Byte-for-byte comparison; the error belongs to the confirmation field
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    validate_required(confirmation, "Please confirm your password")?;
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(is_valid_email("a_b%c-d@sub-domain.org"));
    }

    #[test]
    fn test_email_rejects() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_validate_email_messages() {
        assert_eq!(validate_email(""), Err("Email is required".to_string()));
        assert_eq!(
            validate_email("user@"),
            Err("Please enter a valid email".to_string())
        );
        assert_eq!(validate_email("user@example.com"), Ok(()));
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password(""), Err("Password is required".to_string()));
        assert_eq!(
            validate_password("abc12"),
            Err("Password must be at least 6 characters".to_string())
        );
        assert_eq!(validate_password("abcdef"), Ok(()));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: three of them make six units
        assert_eq!(validate_password("\u{1F600}\u{1F600}\u{1F600}"), Ok(()));
        assert_eq!(
            validate_password("\u{1F600}\u{1F600}a"),
            Err("Password must be at least 6 characters".to_string())
        );
        // BMP characters count one each
        assert_eq!(validate_password("chaï65"), Ok(()));
    }

    #[test]
    fn test_validate_confirmation() {
        assert_eq!(validate_confirmation("abcdef", "abcdef"), Ok(()));
        assert_eq!(
            validate_confirmation("abcdef", "abcdeg"),
            Err("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_confirmation("abcdef", ""),
            Err("Please confirm your password".to_string())
        );
    }

    #[test]
    fn test_field_errors_check_and_clear() {
        let mut errors = FieldErrors::new();
        errors.check(FormField::Email, validate_email("nope"));
        errors.check(FormField::Password, validate_password("abcdef"));
        assert_eq!(errors.len(), 1);
        assert!(errors.has(FormField::Email));
        assert!(!errors.has(FormField::Password));
        errors.clear(FormField::Email);
        assert!(errors.is_empty());
    }
}
