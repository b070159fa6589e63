use serde::Serialize;
use serde_json::{Map, Value};

pub const EVENT_OPEN_RECORD_MODAL: &str = "open record video modal";
pub const EVENT_OPEN_UPLOAD_MODAL: &str = "open upload video modal";
pub const EVENT_UPLOAD_PAYWALL_HIT: &str = "hit video upload paywall";
pub const EVENT_SCHEDULE_DEMO: &str = "clicked schedule demo";
pub const EVENT_BILLING_CYCLE_CHANGED: &str = "change billing cycle";
pub const EVENT_CONTACT_ENTERPRISE: &str = "clicked contact enterprise plan";

/// A named analytics event with its property map
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Event for a record/upload entry point: carries the raw tier and the CTA tag
    pub fn for_action(name: &str, subscription_status: Option<String>, cta: &str) -> Self {
        let status = subscription_status.map(Value::String).unwrap_or(Value::Null);
        Self::new(name)
            .with("stripeSubscriptionStatus", status)
            .with("cta", cta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_event_carries_tier_and_cta() {
        let event = AnalyticsEvent::for_action(
            EVENT_OPEN_UPLOAD_MODAL,
            Some("active".to_string()),
            "empty video list page",
        );
        assert_eq!(event.name, "open upload video modal");
        assert_eq!(event.properties["stripeSubscriptionStatus"], "active");
        assert_eq!(event.properties["cta"], "empty video list page");
    }

    #[test]
    fn missing_tier_is_null() {
        let event = AnalyticsEvent::for_action(EVENT_OPEN_RECORD_MODAL, None, "landing page");
        assert_eq!(event.properties["stripeSubscriptionStatus"], Value::Null);
    }
}
