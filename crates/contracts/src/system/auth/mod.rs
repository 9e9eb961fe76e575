//! Login and signup forms. Validation only: there is no authentication
//! backend, submission is simulated by the caller.

use serde::{Deserialize, Serialize};

use crate::shared::validation::{
    validate_confirmation, validate_email, validate_password, validate_required, FieldErrors,
    FormField,
};

/// Delay of the simulated sign-in / sign-up request
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1500;

/// Form field values with one-pass validation
pub trait AuthForm: Clone + Default {
    /// Every violated field is reported, not just the first
    fn validate(&self) -> FieldErrors;

    fn set_field(&mut self, field: FormField, value: String);

    /// Current value of a field; empty for fields the form does not have
    fn field(&self, field: FormField) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl AuthForm for LoginForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(FormField::Email, validate_email(&self.email));
        errors.check(FormField::Password, validate_password(&self.password));
        errors
    }

    fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            _ => {}
        }
    }

    fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm for SignupForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(FormField::Name, validate_required(&self.name, "Name is required"));
        errors.check(FormField::Email, validate_email(&self.email));
        errors.check(FormField::Password, validate_password(&self.password));
        errors.check(
            FormField::ConfirmPassword,
            validate_confirmation(&self.password, &self.confirm_password),
        );
        errors
    }

    fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
            _ => {}
        }
    }

    fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// The caller navigates away
    Succeeded,
}

/// `Idle -> Submitting -> Succeeded`, or back to `Idle` with errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState<F: AuthForm> {
    pub fields: F,
    errors: FieldErrors,
    phase: SubmitPhase,
}

impl<F: AuthForm> AuthFormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Typing clears that field's error without re-validating
    pub fn edit(&mut self, field: FormField, value: String) {
        self.fields.set_field(field, value);
        self.errors.clear(field);
    }

    /// Returns true when the simulated request should start
    pub fn submit(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        let errors = self.fields.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::new();
        self.phase = SubmitPhase::Submitting;
        true
    }

    pub fn complete(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Succeeded;
        }
    }

    pub fn submit_label(&self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.is_submitting() {
            busy
        } else {
            idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_login_reports_all_fields_at_once() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
    }

    #[test]
    fn test_login_valid() {
        let form = LoginForm {
            email: "user@example.com".into(),
            password: "abcdef".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_signup_short_password() {
        let errors = signup("Asha", "asha@example.com", "abc12", "abc12").validate();
        assert_eq!(
            errors.get(FormField::Password),
            Some("Password must be at least 6 characters")
        );
        assert!(!errors.has(FormField::ConfirmPassword));
    }

    #[test]
    fn test_signup_matching_pair_accepted() {
        let errors = signup("Asha", "asha@example.com", "abcdef", "abcdef").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_signup_mismatch_only_on_confirmation() {
        let errors = signup("Asha", "asha@example.com", "abcdef", "abcdeg").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert!(!errors.has(FormField::Password));
    }

    #[test]
    fn test_signup_empty_reports_every_field() {
        let errors = SignupForm::default().validate();
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_state_machine_rejects_then_accepts() {
        let mut state = AuthFormState::<LoginForm>::new();
        assert!(!state.submit());
        assert_eq!(state.phase(), SubmitPhase::Idle);
        assert_eq!(state.errors().len(), 2);

        state.edit(FormField::Email, "user@example.com".into());
        assert!(!state.errors().has(FormField::Email));
        assert!(state.errors().has(FormField::Password));

        state.edit(FormField::Password, "abcdef".into());
        assert!(state.submit());
        assert!(state.is_submitting());
        assert_eq!(state.submit_label("Sign In", "Signing in..."), "Signing in...");

        // Disabled while submitting
        assert!(!state.submit());

        state.complete();
        assert_eq!(state.phase(), SubmitPhase::Succeeded);
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut state = AuthFormState::<LoginForm>::new();
        state.submit();
        state.edit(FormField::Email, "still-bad".into());
        assert!(!state.errors().has(FormField::Email));
    }
}
