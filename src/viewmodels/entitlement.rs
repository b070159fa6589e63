// ============================================================================
// ENTITLEMENTS - who may open which dialog
// ============================================================================
// Record is gated only by browser capability; upload by subscription tier,
// unless monetization is switched off entirely.
// ============================================================================

use crate::models::analytics::{
    EVENT_OPEN_RECORD_MODAL, EVENT_OPEN_UPLOAD_MODAL, EVENT_UPLOAD_PAYWALL_HIT,
};
use crate::models::{AnalyticsEvent, SessionStatus, SubscriptionStatus};
use crate::stores::ModalKind;
use crate::utils::constants::CAPTURE_UNSUPPORTED_MESSAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialReason {
    CaptureUnsupported,
    SubscriptionRequired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entitlement {
    Allowed,
    Denied(DenialReason),
}

pub fn check_record(capture_supported: bool) -> Entitlement {
    if capture_supported {
        Entitlement::Allowed
    } else {
        Entitlement::Denied(DenialReason::CaptureUnsupported)
    }
}

pub fn check_upload(subscription: SubscriptionStatus, monetization_enabled: bool) -> Entitlement {
    if subscription == SubscriptionStatus::Active || !monetization_enabled {
        Entitlement::Allowed
    } else {
        Entitlement::Denied(DenialReason::SubscriptionRequired)
    }
}

/// What a click on record/upload turns into
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Blocking warning, nothing else changes
    Alert(&'static str),
    Open {
        modal: ModalKind,
        event: AnalyticsEvent,
    },
}

pub fn record_outcome(capture_supported: bool, session: &SessionStatus, cta: &str) -> ActionOutcome {
    match check_record(capture_supported) {
        Entitlement::Allowed => ActionOutcome::Open {
            modal: ModalKind::Record,
            event: AnalyticsEvent::for_action(
                EVENT_OPEN_RECORD_MODAL,
                session.raw_subscription_status(),
                cta,
            ),
        },
        Entitlement::Denied(_) => ActionOutcome::Alert(CAPTURE_UNSUPPORTED_MESSAGE),
    }
}

pub fn upload_outcome(session: &SessionStatus, monetization_enabled: bool, cta: &str) -> ActionOutcome {
    let raw_status = session.raw_subscription_status();
    match check_upload(session.subscription(), monetization_enabled) {
        Entitlement::Allowed => ActionOutcome::Open {
            modal: ModalKind::Upload,
            event: AnalyticsEvent::for_action(EVENT_OPEN_UPLOAD_MODAL, raw_status, cta),
        },
        Entitlement::Denied(_) => ActionOutcome::Open {
            modal: ModalKind::Paywall,
            event: AnalyticsEvent::for_action(EVENT_UPLOAD_PAYWALL_HIT, raw_status, cta),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionUser};

    fn session_with(status: Option<&str>) -> SessionStatus {
        SessionStatus::Authenticated(Session {
            user: SessionUser {
                id: "u1".to_string(),
                name: None,
                email: None,
                image: None,
                stripe_subscription_status: status.map(str::to_string),
            },
            expires: None,
        })
    }

    #[test]
    fn record_requires_capture_support() {
        assert_eq!(check_record(true), Entitlement::Allowed);
        assert_eq!(
            check_record(false),
            Entitlement::Denied(DenialReason::CaptureUnsupported)
        );
    }

    #[test]
    fn upload_matrix() {
        assert_eq!(check_upload(SubscriptionStatus::Active, true), Entitlement::Allowed);
        assert_eq!(check_upload(SubscriptionStatus::Active, false), Entitlement::Allowed);
        assert_eq!(check_upload(SubscriptionStatus::InactiveOrNone, false), Entitlement::Allowed);
        assert_eq!(
            check_upload(SubscriptionStatus::InactiveOrNone, true),
            Entitlement::Denied(DenialReason::SubscriptionRequired)
        );
    }

    #[test]
    fn inactive_upload_opens_paywall_not_upload() {
        let outcome = upload_outcome(&session_with(Some("canceled")), true, "empty video list page");
        match outcome {
            ActionOutcome::Open { modal, event } => {
                assert_eq!(modal, ModalKind::Paywall);
                assert_eq!(event.name, EVENT_UPLOAD_PAYWALL_HIT);
                assert_eq!(event.properties["stripeSubscriptionStatus"], "canceled");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn active_upload_opens_upload_not_paywall() {
        let outcome = upload_outcome(&session_with(Some("active")), true, "empty video list page");
        match outcome {
            ActionOutcome::Open { modal, event } => {
                assert_eq!(modal, ModalKind::Upload);
                assert_eq!(event.name, EVENT_OPEN_UPLOAD_MODAL);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn unsupported_record_only_alerts() {
        let outcome = record_outcome(false, &session_with(Some("active")), "landing page");
        assert_eq!(outcome, ActionOutcome::Alert("Your browser is currently NOT supported."));
    }

    #[test]
    fn supported_record_opens_dialog_with_cta_tag() {
        let outcome = record_outcome(true, &SessionStatus::Unauthenticated, "cta section");
        match outcome {
            ActionOutcome::Open { modal, event } => {
                assert_eq!(modal, ModalKind::Record);
                assert_eq!(event.name, EVENT_OPEN_RECORD_MODAL);
                assert_eq!(event.properties["cta"], "cta section");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
