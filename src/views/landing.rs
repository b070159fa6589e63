// ============================================================================
// LANDING VIEW - public home page
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Card, CardSwap, Cta, Footer, Header, Paywall, RecordModal};
use crate::config::CONFIG;
use crate::hooks::{use_analytics, use_feature_flag, use_modals, use_record_action, use_session_context};
use crate::models::analytics::EVENT_SCHEDULE_DEMO;
use crate::models::AnalyticsEvent;
use crate::services::FLAG_SHOW_DEMO_BUTTON;
use crate::stores::ModalKind;
use crate::viewmodels::public_redirect;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎥",
        title: "Record in one click",
        description: "Capture your screen, a window or a single tab straight from the browser.",
    },
    Feature {
        icon: "🔗",
        title: "Share a link",
        description: "Every recording gets a shareable link the moment you stop.",
    },
    Feature {
        icon: "⬆️",
        title: "Bring your videos",
        description: "Upload recordings made with other tools into the same library.",
    },
    Feature {
        icon: "🔓",
        title: "Open source",
        description: "Self-host it or read the code, everything is on Github.",
    },
];

const SLIDES: [(&str, &str); 3] = [
    ("Async standups", "Skip the meeting, send a two minute update."),
    ("Bug reports", "Show the bug instead of describing it."),
    ("Walkthroughs", "Explain a pull request while you scroll through it."),
];

#[function_component(LandingView)]
pub fn landing_view() -> Html {
    let session = use_session_context();
    let modals = use_modals();
    let navigator = use_navigator();
    let analytics = use_analytics();
    let show_demo = use_feature_flag(FLAG_SHOW_DEMO_BUTTON);
    let record = use_record_action("landing page");

    {
        let record_open = modals.is_open(ModalKind::Record);
        let status = session.status().clone();
        use_effect_with((status, record_open), move |(status, record_open)| {
            if let (Some(route), Some(navigator)) = (public_redirect(status, *record_open), navigator) {
                log::info!("➡️ [LANDING] Already signed in, opening library");
                navigator.push(&route);
            }
            || ()
        });
    }

    let on_schedule_demo = {
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.capture(AnalyticsEvent::new(EVENT_SCHEDULE_DEMO));
        })
    };

    html! {
        <div class="landing">
            <Header />

            <section class="hero">
                <div class="hero-copy">
                    <h1>{"Beautiful screen recordings, shared in seconds"}</h1>
                    <p class="hero-subtitle">
                        {"Record your screen and camera, then share a link. The open source alternative to Loom."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary btn-lg" onclick={record.reform(|_: MouseEvent| ())}>
                            {"Record a Video"}
                        </button>
                        if show_demo {
                            <a
                                class="btn-outline btn-lg"
                                href={CONFIG.demo_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                onclick={on_schedule_demo}
                            >
                                {"Schedule Demo"}
                            </a>
                        }
                    </div>
                </div>

                <div class="hero-visual">
                    <CardSwap pause_on_hover={true}>
                        { for SLIDES.iter().map(|(title, text)| html! {
                            <Card key={*title}>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Card>
                        }) }
                    </CardSwap>
                </div>
            </section>

            <section class="features">
                <h2>{"Everything you need to talk async"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|f| html! {
                        <div key={f.title} class="feature-card">
                            <span class="feature-icon">{f.icon}</span>
                            <h3>{f.title}</h3>
                            <p>{f.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <Cta />
            <Footer />

            <RecordModal />
            <Paywall />
        </div>
    }
}
