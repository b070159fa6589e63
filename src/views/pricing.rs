// ============================================================================
// PRICING VIEW
// ============================================================================

use std::collections::BTreeSet;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{BillingToggle, Cta, Footer, Header, RecordModal, Tooltip};
use crate::hooks::use_analytics;
use crate::models::analytics::{EVENT_BILLING_CYCLE_CHANGED, EVENT_CONTACT_ENTERPRISE};
use crate::models::{AnalyticsEvent, BillingCycle, Plan};
use crate::utils::constants::SALES_EMAIL;
use crate::viewmodels::pricing_viewmodel::{billing_note, faqs, plans, toggle_faq};

fn render_plan(plan: &Plan, cycle: BillingCycle) -> Html {
    html! {
        <div key={plan.name} class="plan-card plan-card-featured">
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-price">
                {plan.price(cycle)}<span class="plan-period">{"/ month"}</span>
            </p>
            <p class="plan-billed">{billing_note(cycle)}</p>
            <Link<Route> to={Route::SignIn} classes="btn-primary btn-block">{"Get started"}</Link<Route>>
            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! {
                    <li key={f.feature} class={classes!((!f.included).then_some("excluded"))}>
                        <Tooltip title={f.description}>
                            <span>{if f.included { "✓ " } else { "✕ " }}{f.feature}</span>
                        </Tooltip>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(PricingView)]
pub fn pricing_view() -> Html {
    let analytics = use_analytics();
    let cycle = use_state(BillingCycle::default);
    let open_faqs = use_state(BTreeSet::<usize>::new);

    let on_toggle = {
        let cycle = cycle.clone();
        let analytics = analytics.clone();
        Callback::from(move |_| {
            let next = cycle.toggled();
            analytics.capture(AnalyticsEvent::new(EVENT_BILLING_CYCLE_CHANGED).with("billing", next.as_str()));
            cycle.set(next);
        })
    };

    let on_contact = {
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.capture(AnalyticsEvent::new(EVENT_CONTACT_ENTERPRISE));
        })
    };

    html! {
        <div class="pricing">
            <Header />

            <section class="pricing-hero">
                <h1>{"Simple pricing"}</h1>
                <p>{"Record for free. Upgrade when you need more."}</p>
                <BillingToggle cycle={*cycle} on_toggle={on_toggle} />
            </section>

            <section class="plans">
                { for plans().iter().map(|plan| render_plan(plan, *cycle)) }
                <div class="plan-card">
                    <h3 class="plan-name">{"Enterprise"}</h3>
                    <p class="plan-price">{"Custom"}</p>
                    <a class="btn-outline btn-block" href={SALES_EMAIL} onclick={on_contact}>
                        {"Contact us"}
                    </a>
                    <ul class="plan-features">
                        <li>{"✓ Everything in Pro"}</li>
                        <li>{"✓ Single sign-on"}</li>
                        <li>{"✓ Priority support"}</li>
                    </ul>
                </div>
            </section>

            <section class="faq">
                <h2>{"Frequently asked questions"}</h2>
                { for faqs().into_iter().enumerate().map(|(index, faq)| {
                    let expanded = open_faqs.contains(&index);
                    let onclick = {
                        let open_faqs = open_faqs.clone();
                        Callback::from(move |_: MouseEvent| open_faqs.set(toggle_faq(&open_faqs, index)))
                    };
                    html! {
                        <div key={index} class={classes!("faq-item", expanded.then_some("open"))}>
                            <button class="faq-question" {onclick}>
                                <span>{faq.question}</span>
                                <span>{if expanded { "−" } else { "+" }}</span>
                            </button>
                            if expanded {
                                <p class="faq-answer">{faq.answer}</p>
                            }
                        </div>
                    }
                }) }
            </section>

            <Cta />
            <Footer />
            <RecordModal />
        </div>
    }
}
