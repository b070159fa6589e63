pub mod error;
pub mod api_client;
pub mod auth_service;
pub mod video_service;
pub mod analytics_service;
pub mod feature_flag_service;

pub use error::ApiError;
pub use api_client::ApiClient;
pub use auth_service::*;
pub use video_service::*;
pub use analytics_service::AnalyticsClient;
pub use feature_flag_service::{fetch_feature_flags, FeatureFlags, FLAG_SHOW_DEMO_BUTTON};
