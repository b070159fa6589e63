// ============================================================================
// RECORD / UPLOAD ACTIONS
// ============================================================================
// Entry points shared by the landing page, CTA section, header menu and the
// empty library. The decision lives in viewmodels::entitlement.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::modal_context::{use_modals, UseModalsHandle};
use crate::hooks::session_context::use_session_context;
use crate::hooks::use_analytics::use_analytics;
use crate::services::AnalyticsClient;
use crate::utils::browser;
use crate::viewmodels::entitlement::{record_outcome, upload_outcome, ActionOutcome};

fn apply(outcome: ActionOutcome, modals: &UseModalsHandle, analytics: &AnalyticsClient) {
    match outcome {
        ActionOutcome::Alert(message) => {
            log::warn!("⚠️ {}", message);
            browser::alert(message);
        }
        ActionOutcome::Open { modal, event } => {
            modals.open.emit(modal);
            analytics.capture(event);
        }
    }
}

#[hook]
pub fn use_record_action(cta: &'static str) -> Callback<()> {
    let session = use_session_context();
    let modals = use_modals();
    let analytics: Rc<AnalyticsClient> = use_analytics();

    Callback::from(move |_| {
        let outcome = record_outcome(browser::supports_screen_capture(), session.status(), cta);
        apply(outcome, &modals, &analytics);
    })
}

#[hook]
pub fn use_upload_action(cta: &'static str) -> Callback<()> {
    let session = use_session_context();
    let modals = use_modals();
    let analytics: Rc<AnalyticsClient> = use_analytics();

    Callback::from(move |_| {
        let outcome = upload_outcome(session.status(), CONFIG.monetization_enabled(), cta);
        apply(outcome, &modals, &analytics);
    })
}
