use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub analytics: AnalyticsConfig,
    /// Stripe publishable key. `None` turns monetization off: uploads skip the paywall.
    pub stripe_publishable_key: Option<String>,
    pub demo_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            analytics: AnalyticsConfig::default(),
            stripe_publishable_key: None,
            demo_url: "https://cal.com/hemanth/chitram-demo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub posthog_key: Option<String>,
    pub posthog_host: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            posthog_key: None,
            posthog_host: "https://app.posthog.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            analytics: AnalyticsConfig {
                posthog_key: non_empty(option_env!("POSTHOG_KEY")),
                posthog_host: option_env!("POSTHOG_HOST")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.analytics.posthog_host),
            },
            stripe_publishable_key: non_empty(option_env!("STRIPE_PUBLISHABLE_KEY")),
            demo_url: option_env!("DEMO_URL")
                .map(str::to_string)
                .unwrap_or(defaults.demo_url),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Monetization is on only when a payment key is configured
    pub fn monetization_enabled(&self) -> bool {
        self.stripe_publishable_key.is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_monetization_off() {
        let config = AppConfig::default();
        assert!(!config.monetization_enabled());
        assert!(!config.is_production());
    }

    #[test]
    fn monetization_follows_publishable_key() {
        let config = AppConfig {
            stripe_publishable_key: Some("pk_test_123".to_string()),
            ..AppConfig::default()
        };
        assert!(config.monetization_enabled());
    }

    #[test]
    fn non_empty_drops_blank_values() {
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" pk ")), Some("pk".to_string()));
    }
}
