use std::fmt;

use gloo_net::http::Request;
use serde::Serialize;

use crate::inquiry::form::InquiryForm;

/// EmailJS-compatible relay endpoint; the service/template/key triple in
/// [`RelayConfig`] decides where the message actually lands.
pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the hosted relay, injected at build time. See
/// `config::delivery` for where they come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Compose-fallback settings: the inquiry becomes a pre-filled draft in the
/// visitor's own mail client, addressed to the site owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeConfig {
    pub recipient: String,
}

/// The one delivery strategy the contact section is built with. Selected by
/// configuration at startup, never switched at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Relay(RelayConfig),
    Compose(ComposeConfig),
}

#[derive(Debug)]
pub enum DeliveryError {
    /// Request never reached the relay, or the payload failed to build.
    Network(String),
    /// The relay answered with a non-success status.
    Rejected(u16),
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::Network(msg) => write!(f, "relay request failed: {}", msg),
            DeliveryError::Rejected(status) => write!(f, "relay rejected message: HTTP {}", status),
        }
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a InquiryForm,
}

impl Delivery {
    /// Sends one inquiry. No internal retry; the form keeps its contents on
    /// failure so the visitor can resubmit. The compose variant reports
    /// success unconditionally once the handoff is issued, since nothing
    /// observable comes back from the visitor's mail client.
    pub async fn send(&self, form: &InquiryForm) -> Result<(), DeliveryError> {
        match self {
            Delivery::Relay(config) => send_via_relay(config, form).await,
            Delivery::Compose(config) => {
                let target = compose_target(&config.recipient, form);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&target);
                }
                Ok(())
            }
        }
    }
}

async fn send_via_relay(config: &RelayConfig, form: &InquiryForm) -> Result<(), DeliveryError> {
    let payload = RelayPayload {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: form,
    };
    let response = Request::post(RELAY_ENDPOINT)
        .json(&payload)
        .map_err(|e| DeliveryError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(DeliveryError::Rejected(response.status()))
    }
}

/// Builds the `mailto:` target for the compose fallback. Subject carries the
/// collaboration type so the owner can triage from the inbox list; the body
/// repeats every field in labelled form.
pub fn compose_target(recipient: &str, form: &InquiryForm) -> String {
    let subject = format!("{} - {}", form.subject, form.collaboration_type.value());
    let body = format!(
        "Name: {}\nEmail: {}\nCollaboration type: {}\n\nMessage:\n{}",
        form.name,
        form.email,
        form.collaboration_type.label(),
        form.message,
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::form::CollaborationType;

    fn filled() -> InquiryForm {
        InquiryForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "Let's talk.".into(),
            collaboration_type: CollaborationType::Mentor,
        }
    }

    #[test]
    fn compose_subject_decodes_to_subject_dash_type() {
        let target = compose_target("owner@example.com", &filled());
        assert!(target.starts_with("mailto:owner@example.com?subject="));

        let subject_part = target
            .split("subject=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .unwrap();
        let decoded = urlencoding::decode(subject_part).unwrap();
        assert_eq!(decoded, "Hello - mentor");
    }

    #[test]
    fn compose_body_carries_all_fields_labelled() {
        let target = compose_target("owner@example.com", &filled());
        let body_part = target.split("body=").nth(1).unwrap();
        let decoded = urlencoding::decode(body_part).unwrap();
        assert!(decoded.contains("Name: Jane Doe"));
        assert!(decoded.contains("Email: jane@example.com"));
        assert!(decoded.contains("Collaboration type: Mentorship"));
        assert!(decoded.contains("Message:\nLet's talk."));
    }

    #[test]
    fn relay_payload_matches_wire_shape() {
        let form = InquiryForm {
            collaboration_type: CollaborationType::Sponsorship,
            ..filled()
        };
        let payload = RelayPayload {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "public_123",
            template_params: &form,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_id"], "template_xyz");
        assert_eq!(value["user_id"], "public_123");
        assert_eq!(value["template_params"]["name"], "Jane Doe");
        assert_eq!(value["template_params"]["collaborationType"], "sponsorship");
    }
}
