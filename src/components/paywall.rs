// ============================================================================
// PAYWALL - upgrade prompt shown when an upload is not entitled
// ============================================================================
// Checkout runs in a 500x500 popup; the library recognises that size on return.
// ============================================================================

use yew::prelude::*;

use crate::components::billing_toggle::BillingToggle;
use crate::components::modal_frame::ModalFrame;
use crate::hooks::use_modals;
use crate::models::BillingCycle;
use crate::services::ApiClient;
use crate::stores::ModalKind;
use crate::utils::browser;
use crate::utils::constants::{POPUP_HEIGHT, POPUP_WIDTH};
use crate::viewmodels::pricing_viewmodel::{checkout_url, plans};

#[function_component(Paywall)]
pub fn paywall() -> Html {
    let modals = use_modals();
    let cycle = use_state(BillingCycle::default);

    if !modals.is_open(ModalKind::Paywall) {
        return html! {};
    }

    let on_close = modals.close.reform(|_| ModalKind::Paywall);

    let on_toggle = {
        let cycle = cycle.clone();
        Callback::from(move |_| cycle.set(cycle.toggled()))
    };

    let on_upgrade = {
        let cycle = *cycle;
        Callback::from(move |_: MouseEvent| {
            let url = match checkout_url(&ApiClient::new(), cycle) {
                Ok(url) => url,
                Err(e) => {
                    log::error!("❌ {}", e);
                    return;
                }
            };
            log::info!("💳 Opening checkout ({})", cycle.as_str());
            if !browser::open_popup(&url, "checkout", POPUP_WIDTH, POPUP_HEIGHT) {
                browser::hard_navigate(&url);
            }
        })
    };

    let plan = plans().into_iter().next();

    html! {
        <ModalFrame title="Upgrade to upload" on_close={on_close} class="modal-paywall">
            <p class="modal-text">{"Uploading external videos is part of the Pro plan."}</p>
            <BillingToggle cycle={*cycle} on_toggle={on_toggle} />
            if let Some(plan) = plan {
                <div class="paywall-plan">
                    <span class="plan-name">{plan.name}</span>
                    <span class="plan-price">
                        {plan.price(*cycle)}<span class="plan-period">{"/ month"}</span>
                    </span>
                    <ul class="plan-features">
                        { for plan.features.iter().map(|f| html! {
                            <li key={f.feature}>{"✓ "}{f.feature}</li>
                        }) }
                    </ul>
                </div>
            }
            <button class="btn-primary btn-block" onclick={on_upgrade}>{"Upgrade"}</button>
        </ModalFrame>
    }
}
