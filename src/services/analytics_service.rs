// ============================================================================
// ANALYTICS - fire-and-forget PostHog capture
// ============================================================================

use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::models::AnalyticsEvent;
use crate::services::api_client::ApiClient;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsClient {
    api_key: Option<String>,
    host: String,
    distinct_id: String,
}

impl AnalyticsClient {
    pub fn new(distinct_id: String) -> Self {
        Self {
            api_key: CONFIG.analytics.posthog_key.clone(),
            host: CONFIG.analytics.posthog_host.clone(),
            distinct_id,
        }
    }

    pub fn with_key(api_key: Option<&str>, host: &str, distinct_id: &str) -> Self {
        Self {
            api_key: api_key.map(str::to_string),
            host: host.trim_end_matches('/').to_string(),
            distinct_id: distinct_id.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn capture_url(&self) -> String {
        format!("{}/capture/", self.host)
    }

    /// Request body for the capture endpoint; `None` when analytics is off
    pub fn capture_payload(&self, event: &AnalyticsEvent) -> Option<Value> {
        let api_key = self.api_key.as_ref()?;
        Some(json!({
            "api_key": api_key,
            "event": event.name,
            "distinct_id": self.distinct_id,
            "properties": event.properties,
        }))
    }

    /// Sends the event in the background; failures are logged, never surfaced
    pub fn capture(&self, event: AnalyticsEvent) {
        let Some(payload) = self.capture_payload(&event) else {
            log::debug!("📊 Analytics off, dropping '{}'", event.name);
            return;
        };
        let url = self.capture_url();
        log::info!("📊 capture '{}'", event.name);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ApiClient::new().post_and_forget(&url, &payload).await {
                log::warn!("⚠️ Analytics capture failed: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analytics::EVENT_UPLOAD_PAYWALL_HIT;

    #[test]
    fn payload_is_none_without_key() {
        let client = AnalyticsClient::with_key(None, "https://app.posthog.com", "anon-1");
        assert!(!client.is_enabled());
        assert!(client.capture_payload(&AnalyticsEvent::new("x")).is_none());
    }

    #[test]
    fn payload_carries_event_and_distinct_id() {
        let client = AnalyticsClient::with_key(Some("phc_key"), "https://eu.posthog.com/", "user-42");
        let event = AnalyticsEvent::for_action(EVENT_UPLOAD_PAYWALL_HIT, None, "empty video list page");
        let payload = client.capture_payload(&event).unwrap();
        assert_eq!(client.capture_url(), "https://eu.posthog.com/capture/");
        assert_eq!(payload["api_key"], "phc_key");
        assert_eq!(payload["event"], "hit video upload paywall");
        assert_eq!(payload["distinct_id"], "user-42");
        assert_eq!(payload["properties"]["cta"], "empty video list page");
    }
}
