use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_analytics, use_record_action};
use crate::models::analytics::EVENT_SCHEDULE_DEMO;
use crate::models::AnalyticsEvent;

#[function_component(Cta)]
pub fn cta() -> Html {
    let open_record = use_record_action("cta section");
    let analytics = use_analytics();

    let on_schedule_demo = Callback::from(move |_: MouseEvent| {
        analytics.capture(AnalyticsEvent::new(EVENT_SCHEDULE_DEMO).with("cta", true));
    });

    html! {
        <div class="cta-section">
            <div class="cta-card fade-in-up">
                <h2 class="cta-title">{"Ready to transform your team's communication?"}</h2>
                <div class="cta-actions">
                    <button class="btn-light" onclick={open_record.reform(|_: MouseEvent| ())}>
                        {"Record a video"}
                    </button>
                    <a
                        class="cta-demo-link"
                        target="_blank"
                        rel="noopener noreferrer"
                        href={CONFIG.demo_url.clone()}
                        onclick={on_schedule_demo}
                    >
                        {"Schedule Demo "}<span aria-hidden="true">{"→"}</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
