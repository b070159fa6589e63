use crate::app::Route;
use crate::models::SessionStatus;

/// Where a protected view sends a visitor without a session
pub fn protected_redirect(session: &SessionStatus) -> Option<Route> {
    session.is_unauthenticated().then_some(Route::SignIn)
}

/// Where a public page sends a visitor who is already signed in.
/// A visitor recording from the landing page stays put.
pub fn public_redirect(session: &SessionStatus, record_modal_open: bool) -> Option<Route> {
    (session.is_authenticated() && !record_modal_open).then_some(Route::Videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionUser};

    fn signed_in() -> SessionStatus {
        SessionStatus::Authenticated(Session {
            user: SessionUser {
                id: "u1".to_string(),
                name: None,
                email: None,
                image: None,
                stripe_subscription_status: None,
            },
            expires: None,
        })
    }

    #[test]
    fn only_unauthenticated_is_sent_to_sign_in() {
        assert_eq!(protected_redirect(&SessionStatus::Unauthenticated), Some(Route::SignIn));
        assert_eq!(protected_redirect(&SessionStatus::Loading), None);
        assert_eq!(protected_redirect(&signed_in()), None);
    }

    #[test]
    fn signed_in_visitors_leave_public_pages() {
        assert_eq!(public_redirect(&signed_in(), false), Some(Route::Videos));
        assert_eq!(public_redirect(&signed_in(), true), None);
        assert_eq!(public_redirect(&SessionStatus::Unauthenticated, false), None);
        assert_eq!(public_redirect(&SessionStatus::Loading, false), None);
    }
}
