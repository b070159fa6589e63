use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::models::SessionStatus;
use crate::services::AnalyticsClient;
use crate::utils::load_or_create_distinct_id;

/// The signed-in user's id, otherwise the anonymous visitor id
pub fn distinct_id_for(status: &SessionStatus, anonymous_id: &str) -> String {
    status
        .user()
        .map(|user| user.id.clone())
        .unwrap_or_else(|| anonymous_id.to_string())
}

/// Identity shared by analytics events and feature flag lookups
#[hook]
pub fn use_distinct_id() -> String {
    let session = use_session_context();
    let anonymous_id = use_state(load_or_create_distinct_id);
    distinct_id_for(session.status(), &anonymous_id)
}

#[hook]
pub fn use_analytics() -> Rc<AnalyticsClient> {
    let distinct_id = use_distinct_id();
    use_memo(distinct_id, |id| AnalyticsClient::new(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionUser};

    #[test]
    fn signed_in_user_id_wins_over_anonymous_id() {
        let status = SessionStatus::Authenticated(Session {
            user: SessionUser {
                id: "user-42".to_string(),
                name: None,
                email: None,
                image: None,
                stripe_subscription_status: None,
            },
            expires: None,
        });
        assert_eq!(distinct_id_for(&status, "anon-1"), "user-42");
        assert_eq!(distinct_id_for(&SessionStatus::Loading, "anon-1"), "anon-1");
        assert_eq!(distinct_id_for(&SessionStatus::Unauthenticated, "anon-1"), "anon-1");
    }
}
