//! Contact & catering form: wire DTOs and the client-side submission state

use serde::{Deserialize, Serialize};

use crate::shared::validation::{validate_email, validate_required, FieldErrors, FormField};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot. Hidden from people, so only bots fill it in.
    pub website: String,
}

impl ContactRequest {
    /// Any content at all in the honeypot counts, whitespace included
    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }

    /// Fields the browser must not submit empty; phone is the only optional one
    pub fn is_required(field: FormField) -> bool {
        matches!(field, FormField::Name | FormField::Email | FormField::Message)
    }

    /// Server-side checks; phone is optional and free-form
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            FormField::Name,
            validate_required(self.name.trim(), "Name is required"),
        );
        errors.check(FormField::Email, validate_email(self.email.trim()));
        errors.check(
            FormField::Message,
            validate_required(self.message.trim(), "Message is required"),
        );
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Interpret an HTTP reply. A non-2xx status or `ok: false` is a failure;
/// the server's message wins over the generic one.
pub fn interpret_reply(status: u16, body: Option<ContactResponse>) -> Result<(), String> {
    let success = (200..300).contains(&status);
    match body {
        Some(reply) if success && reply.ok => Ok(()),
        Some(ContactResponse {
            error: Some(error), ..
        }) if !error.is_empty() => Err(error),
        _ => Err(format!("Request failed ({})", status)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Ok,
    Error(String),
}

/// Client form state: `Idle -> Sending -> Ok | Error`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactRequest,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    /// Payload to post, or `None` while a request is already in flight
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.is_sending() {
            return None;
        }
        self.status = ContactStatus::Sending;
        Some(self.fields.clone())
    }

    /// Success clears the fields; failure keeps them for a retry
    pub fn finish(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.fields = ContactRequest::default();
                self.status = ContactStatus::Ok;
            }
            Err(message) => {
                let message = if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                };
                self.status = ContactStatus::Error(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields = ContactRequest {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "770-555-0100".into(),
            message: "Catering for 40 people".into(),
            website: String::new(),
        };
        form
    }

    /// Stand-in for the network round trip
    fn mocked_endpoint(status: u16, body: &str) -> Result<(), String> {
        let parsed = serde_json::from_str::<ContactResponse>(body).ok();
        interpret_reply(status, parsed)
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let mut form = filled();
        assert_eq!(form.status(), &ContactStatus::Idle);

        let payload = form.begin_submit().expect("payload");
        assert_eq!(payload.name, "Ravi");
        assert_eq!(form.status(), &ContactStatus::Sending);

        form.finish(mocked_endpoint(200, r#"{"ok":true}"#));
        assert_eq!(form.status(), &ContactStatus::Ok);
        assert_eq!(form.fields, ContactRequest::default());
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish(mocked_endpoint(200, r#"{"ok":false,"error":"x"}"#));
        assert_eq!(form.status(), &ContactStatus::Error("x".into()));
        assert_eq!(form.fields.name, "Ravi");
        assert_eq!(form.fields.message, "Catering for 40 people");
    }

    #[test]
    fn test_no_double_submit_while_sending() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_can_retry_after_error() {
        let mut form = filled();
        form.begin_submit();
        form.finish(Err("network down".into()));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_interpret_reply() {
        assert_eq!(interpret_reply(200, Some(ContactResponse::success())), Ok(()));
        assert_eq!(
            interpret_reply(500, None),
            Err("Request failed (500)".to_string())
        );
        assert_eq!(
            interpret_reply(400, Some(ContactResponse::failure("Spam detected"))),
            Err("Spam detected".to_string())
        );
        // 2xx but ok=false without a message
        assert_eq!(
            interpret_reply(200, Some(ContactResponse { ok: false, error: None })),
            Err("Request failed (200)".to_string())
        );
        // ok=true but a non-2xx status is still a failure
        assert_eq!(
            interpret_reply(502, Some(ContactResponse::success())),
            Err("Request failed (502)".to_string())
        );
    }

    #[test]
    fn test_honeypot() {
        let mut request = filled().fields;
        assert!(!request.is_spam());
        request.website = "http://spam.example".into();
        assert!(request.is_spam());
    }

    #[test]
    fn test_whitespace_honeypot_is_spam() {
        let mut request = filled().fields;
        request.website = " ".into();
        assert!(request.is_spam());
        request.website = "\t\n".into();
        assert!(request.is_spam());
    }

    #[test]
    fn test_required_fields_match_validation() {
        let errors = ContactRequest::default().validate();
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Message,
        ] {
            assert_eq!(
                ContactRequest::is_required(field),
                errors.has(field),
                "{:?}",
                field
            );
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(filled().fields.validate().is_empty());
        let errors = ContactRequest::default().validate();
        assert!(errors.has(FormField::Name));
        assert!(errors.has(FormField::Email));
        assert!(errors.has(FormField::Message));
        assert!(!errors.has(FormField::Phone));
    }

    #[test]
    fn test_response_json() {
        let json = serde_json::to_string(&ContactResponse::success()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
        let parsed: ContactRequest =
            serde_json::from_str(r#"{"name":"a","email":"a@b.co","message":"hi"}"#).unwrap();
        assert_eq!(parsed.website, "");
    }
}
