use content::tuning::{LEAD_SUBJECT, RECIPIENT_EMAIL};
use thiserror::Error;

/// Failure causes for a lead submission. The variants are logged
/// individually but collapse into one generic message for the user.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),

    /// The relay answered but declined the submission.
    #[error("relay rejected the submission: {0}")]
    Rejected(String),

    /// The relay answered with something that is not its JSON contract.
    #[error("malformed relay response: {0}")]
    MalformedResponse(String),
}

/// A captured lead. Email is required by the form before a record is
/// ever constructed; the name is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    pub name: Option<String>,
    pub email: String,
}

impl LeadRecord {
    /// Name to show the relay operator, substituting a placeholder when
    /// the visitor left the field blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous User")
    }
}

/// A fully-built submission, ready for whichever transport runs it.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub endpoint: String,
    pub fields: Vec<(&'static str, String)>,
}

pub fn relay_endpoint() -> String {
    format!("https://formsubmit.co/ajax/{RECIPIENT_EMAIL}")
}

/// Builds the multipart field set the relay expects. Underscore-prefixed
/// fields are relay directives, not lead data.
pub fn build_relay_request(lead: &LeadRecord) -> RelayRequest {
    let name = lead.display_name().to_string();
    let message = format!(
        "New early access request!\n\nName: {name}\nEmail: {}\n\nUser wants to receive the MedVault AI APK.",
        lead.email
    );

    RelayRequest {
        endpoint: relay_endpoint(),
        fields: vec![
            ("name", name),
            ("email", lead.email.clone()),
            ("_subject", LEAD_SUBJECT.to_string()),
            ("message", message),
            ("_captcha", "false".to_string()),
            ("_template", "table".to_string()),
        ],
    }
}

/// Interprets the relay's HTTP status and body.
///
/// The relay reports acceptance through a `success` field in a JSON
/// body. In practice it serializes that field as the string `"true"`
/// rather than a boolean, so both spellings are accepted.
pub fn interpret_relay_response(status: u16, body: &str) -> Result<(), RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Rejected(format!("relay returned HTTP {status}")));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|error| RelayError::MalformedResponse(error.to_string()))?;

    let success = match value.get("success") {
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::String(flag)) => flag == "true",
        _ => false,
    };

    if success {
        Ok(())
    } else {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("relay did not accept the submission")
            .to_string();
        Err(RelayError::Rejected(message))
    }
}

/// Transport seam for lead submissions. The production implementation
/// posts to formsubmit.co; tests substitute a stub.
pub trait LeadRelay: Send + Sync {
    fn submit(&self, lead: &LeadRecord) -> Result<(), RelayError>;
}

/// Blocking reqwest transport. Runs on the IO task pool, never on the
/// render thread.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct FormsubmitRelay;

#[cfg(not(target_arch = "wasm32"))]
impl LeadRelay for FormsubmitRelay {
    fn submit(&self, lead: &LeadRecord) -> Result<(), RelayError> {
        let request = build_relay_request(lead);

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|error| RelayError::Network(error.to_string()))?;

        let mut parts = reqwest::blocking::multipart::Form::new();
        for (key, value) in request.fields {
            parts = parts.text(key, value);
        }

        let response = client
            .post(&request.endpoint)
            .multipart(parts)
            .send()
            .map_err(|error| RelayError::Network(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|error| RelayError::Network(error.to_string()))?;

        interpret_relay_response(status, &body)
    }
}

/// Browser transport over the fetch API. Multipart encoding comes from
/// `FormData`, matching what the relay expects from its usual callers.
#[cfg(target_arch = "wasm32")]
pub async fn submit_via_fetch(request: RelayRequest) -> Result<(), RelayError> {
    use gloo_net::http::Request;

    let form = web_sys::FormData::new()
        .map_err(|_| RelayError::Network("failed to allocate form data".to_string()))?;
    for (key, value) in &request.fields {
        form.append_with_str(key, value)
            .map_err(|_| RelayError::Network(format!("failed to append form field '{key}'")))?;
    }

    let response = Request::post(&request.endpoint)
        .body(form)
        .map_err(|error| RelayError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| RelayError::Network(error.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| RelayError::Network(error.to_string()))?;

    interpret_relay_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(request: &'a RelayRequest, key: &str) -> &'a str {
        request
            .fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
            .expect("missing field")
    }

    #[test]
    fn request_carries_lead_and_relay_directives() {
        let lead = LeadRecord {
            name: Some("Ayesha Rahman".to_string()),
            email: "ayesha@example.com".to_string(),
        };
        let request = build_relay_request(&lead);

        assert_eq!(request.endpoint, relay_endpoint());
        assert_eq!(field(&request, "name"), "Ayesha Rahman");
        assert_eq!(field(&request, "email"), "ayesha@example.com");
        assert_eq!(field(&request, "_subject"), LEAD_SUBJECT);
        assert_eq!(field(&request, "_captcha"), "false");
        assert_eq!(field(&request, "_template"), "table");
        assert!(field(&request, "message").contains("Ayesha Rahman"));
        assert!(field(&request, "message").contains("ayesha@example.com"));
    }

    #[test]
    fn blank_name_becomes_placeholder() {
        let lead = LeadRecord {
            name: Some("   ".to_string()),
            email: "someone@example.com".to_string(),
        };
        assert_eq!(lead.display_name(), "Anonymous User");

        let request = build_relay_request(&lead);
        assert_eq!(field(&request, "name"), "Anonymous User");
    }

    #[test]
    fn boolean_success_is_accepted() {
        assert!(interpret_relay_response(200, r#"{"success": true}"#).is_ok());
    }

    #[test]
    fn string_success_is_accepted() {
        let body = r#"{"success": "true", "message": "The form was submitted successfully."}"#;
        assert!(interpret_relay_response(200, body).is_ok());
    }

    #[test]
    fn declared_failure_surfaces_relay_message() {
        let body = r#"{"success": false, "message": "Activation required"}"#;
        match interpret_relay_response(200, body) {
            Err(RelayError::Rejected(message)) => assert!(message.contains("Activation required")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn non_ok_status_is_a_rejection() {
        assert!(matches!(
            interpret_relay_response(422, "Unprocessable"),
            Err(RelayError::Rejected(_))
        ));
    }

    #[test]
    fn unparseable_body_is_malformed() {
        assert!(matches!(
            interpret_relay_response(200, "<html>rate limited</html>"),
            Err(RelayError::MalformedResponse(_))
        ));
    }
}
