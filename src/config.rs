use crate::inquiry::delivery::{ComposeConfig, Delivery, RelayConfig};

/// Site owner address used by the compose fallback and the contact panel.
pub const CONTACT_EMAIL: &str = "chadhavivaan007@gmail.com";

// Relay credentials are baked in at compile time from the build environment,
// never committed as literals. Missing credentials are not an error: the site
// degrades to the compose-email fallback.
const RELAY_SERVICE_ID: Option<&str> = option_env!("INGENIUM_EMAILJS_SERVICE_ID");
const RELAY_TEMPLATE_ID: Option<&str> = option_env!("INGENIUM_EMAILJS_TEMPLATE_ID");
const RELAY_PUBLIC_KEY: Option<&str> = option_env!("INGENIUM_EMAILJS_PUBLIC_KEY");

/// The delivery strategy this build of the site ships with.
pub fn delivery() -> Delivery {
    select(RELAY_SERVICE_ID, RELAY_TEMPLATE_ID, RELAY_PUBLIC_KEY)
}

fn select(
    service_id: Option<&str>,
    template_id: Option<&str>,
    public_key: Option<&str>,
) -> Delivery {
    match (service_id, template_id, public_key) {
        (Some(service_id), Some(template_id), Some(public_key)) => Delivery::Relay(RelayConfig {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        }),
        _ => Delivery::Compose(ComposeConfig {
            recipient: CONTACT_EMAIL.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_credentials_select_the_relay() {
        let delivery = select(Some("service_abc"), Some("template_xyz"), Some("public_123"));
        match delivery {
            Delivery::Relay(config) => {
                assert_eq!(config.service_id, "service_abc");
                assert_eq!(config.template_id, "template_xyz");
                assert_eq!(config.public_key, "public_123");
            }
            Delivery::Compose(_) => panic!("expected relay strategy"),
        }
    }

    #[test]
    fn any_missing_credential_falls_back_to_compose() {
        for delivery in [
            select(None, Some("t"), Some("k")),
            select(Some("s"), None, Some("k")),
            select(Some("s"), Some("t"), None),
            select(None, None, None),
        ] {
            match delivery {
                Delivery::Compose(config) => assert_eq!(config.recipient, CONTACT_EMAIL),
                Delivery::Relay(_) => panic!("expected compose fallback"),
            }
        }
    }
}
