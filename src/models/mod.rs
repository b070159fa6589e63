pub mod session;
pub mod video;
pub mod query;
pub mod viewport;
pub mod analytics;
pub mod pricing;
pub mod auth;

pub use session::{Session, SessionStatus, SessionUser, SubscriptionStatus, SessionResponse};
pub use video::VideoSummary;
pub use query::LibraryQuery;
pub use viewport::Viewport;
pub use analytics::AnalyticsEvent;
pub use pricing::{BillingCycle, Faq, Plan, PlanFeature};
pub use auth::AuthProvider;
