use serde::{Deserialize, Serialize};

/// Subscription tier as far as entitlements are concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    InactiveOrNone,
}

impl SubscriptionStatus {
    /// Maps the billing provider's raw status; only `"active"` counts
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("active") => SubscriptionStatus::Active,
            _ => SubscriptionStatus::InactiveOrNone,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Raw Stripe status ("active", "canceled", "past_due", ...)
    #[serde(default)]
    pub stripe_subscription_status: Option<String>,
}

impl SessionUser {
    pub fn subscription(&self) -> SubscriptionStatus {
        SubscriptionStatus::from_raw(self.stripe_subscription_status.as_deref())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub user: SessionUser,
    #[serde(default)]
    pub expires: Option<String>,
}

/// Body of the identity provider's session endpoint: `{}` when signed out
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub expires: Option<String>,
}

impl SessionResponse {
    pub fn into_status(self) -> SessionStatus {
        match self.user {
            Some(user) => SessionStatus::Authenticated(Session {
                user,
                expires: self.expires,
            }),
            None => SessionStatus::Unauthenticated,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, SessionStatus::Unauthenticated)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    /// Tier of the signed-in user; anonymous and loading sessions have none
    pub fn subscription(&self) -> SubscriptionStatus {
        self.user()
            .map(SessionUser::subscription)
            .unwrap_or(SubscriptionStatus::InactiveOrNone)
    }

    /// Raw status string forwarded to analytics
    pub fn raw_subscription_status(&self) -> Option<String> {
        self.user().and_then(|u| u.stripe_subscription_status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_is_active() {
        assert_eq!(SubscriptionStatus::from_raw(Some("active")), SubscriptionStatus::Active);
        assert_eq!(SubscriptionStatus::from_raw(Some("past_due")), SubscriptionStatus::InactiveOrNone);
        assert_eq!(SubscriptionStatus::from_raw(Some("Active")), SubscriptionStatus::InactiveOrNone);
        assert_eq!(SubscriptionStatus::from_raw(None), SubscriptionStatus::InactiveOrNone);
    }

    #[test]
    fn empty_session_body_is_unauthenticated() {
        let response: SessionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn session_body_with_user_is_authenticated() {
        let body = r#"{
            "user": {"id": "u1", "name": "Ada", "stripeSubscriptionStatus": "active"},
            "expires": "2026-11-01T00:00:00.000Z"
        }"#;
        let status = serde_json::from_str::<SessionResponse>(body).unwrap().into_status();
        assert!(status.is_authenticated());
        assert_eq!(status.subscription(), SubscriptionStatus::Active);
        assert_eq!(status.raw_subscription_status().as_deref(), Some("active"));
    }

    #[test]
    fn loading_session_has_no_tier() {
        let status = SessionStatus::Loading;
        assert!(!status.is_authenticated());
        assert!(!status.is_unauthenticated());
        assert_eq!(status.subscription(), SubscriptionStatus::InactiveOrNone);
    }
}
