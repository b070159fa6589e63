use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub const FLAG_SHOW_DEMO_BUTTON: &str = "show-demo-button";

/// Flags resolved for one visitor. Unknown flags read as disabled.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FeatureFlags {
    flags: HashMap<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecideResponse {
    #[serde(default)]
    feature_flags: HashMap<String, Value>,
}

impl FeatureFlags {
    pub fn from_map(flags: HashMap<String, Value>) -> Self {
        Self { flags }
    }

    /// `true` for boolean true or any non-empty multivariate key
    pub fn is_enabled(&self, name: &str) -> bool {
        match self.flags.get(name) {
            Some(Value::Bool(enabled)) => *enabled,
            Some(Value::String(variant)) => !variant.is_empty(),
            _ => false,
        }
    }
}

/// Asks the flag service which flags are on for `distinct_id`
pub async fn fetch_feature_flags(
    client: &ApiClient,
    distinct_id: &str,
) -> Result<FeatureFlags, ApiError> {
    let Some(api_key) = CONFIG.analytics.posthog_key.as_ref() else {
        return Ok(FeatureFlags::default());
    };
    let url = format!("{}/decide/?v=3", CONFIG.analytics.posthog_host);
    let body = json!({ "api_key": api_key, "distinct_id": distinct_id });
    let response: DecideResponse = client.post_json(&url, &body).await?;
    log::info!("🚩 Feature flags loaded: {}", response.feature_flags.len());
    Ok(FeatureFlags::from_map(response.feature_flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values_are_interpreted() {
        let response: DecideResponse = serde_json::from_str(
            r#"{"featureFlags": {"show-demo-button": true, "hero-copy": "variant-b", "off": false, "blank": ""}}"#,
        )
        .unwrap();
        let flags = FeatureFlags::from_map(response.feature_flags);
        assert!(flags.is_enabled(FLAG_SHOW_DEMO_BUTTON));
        assert!(flags.is_enabled("hero-copy"));
        assert!(!flags.is_enabled("off"));
        assert!(!flags.is_enabled("blank"));
        assert!(!flags.is_enabled("missing"));
    }
}
