// ============================================================================
// VIDEO LIST VIEW - the signed-in library
// ============================================================================
// Renders the single branch picked by `select_branch`. Side effects here:
// the sign-in redirect, the popup detection and the post-checkout reload.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{NewVideoMenu, Paywall, ProfileMenu, RecordModal, UploadModal, VideoCard, VideoCardSkeleton};
use crate::hooks::{use_record_action, use_session_context, use_upload_action, use_videos};
use crate::models::{LibraryQuery, Viewport};
use crate::utils::browser;
use crate::utils::constants::{CHECKOUT_RELOAD_DELAY_MS, SKELETON_CARD_COUNT};
use crate::viewmodels::video_list_viewmodel::{compute_close_window, select_branch, should_schedule_reload};
use crate::viewmodels::{protected_redirect, LibraryBranch, StatusMessage};

#[function_component(EmptyLibrary)]
fn empty_library() -> Html {
    let record = use_record_action("empty video list page");
    let upload = use_upload_action("empty video list page");

    html! {
        <div class="library-empty">
            <h2>{"No videos found"}</h2>
            <p>{"Videos you record or upload will show up here."}</p>
            <div class="library-empty-actions">
                <button class="btn-primary" onclick={record.reform(|_: MouseEvent| ())}>{"Record a video"}</button>
                <button class="btn-outline" onclick={upload.reform(|_: MouseEvent| ())}>{"Upload a video"}</button>
            </div>
        </div>
    }
}

fn render_status(message: StatusMessage) -> Html {
    html! {
        <div class="library-status">
            <h2>{message.title}</h2>
            <p>{message.detail}</p>
        </div>
    }
}

#[function_component(VideoListView)]
pub fn video_list_view() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<LibraryQuery>().ok())
        .unwrap_or_default();
    let videos = use_videos(session.status().is_authenticated());
    let close_window = use_state(|| false);

    // Popup detection, at mount and whenever `close` changes
    {
        let close_window = close_window.clone();
        use_effect_with(query.close.clone(), move |close| {
            close_window.set(compute_close_window(Viewport::current(), close.as_deref()));
            || ()
        });
    }

    {
        let status = session.status().clone();
        use_effect_with(status, move |status| {
            if let (Some(route), Some(navigator)) = (protected_redirect(status), navigator) {
                log::info!("🔒 [LIBRARY] Not signed in, redirecting");
                navigator.replace(&route);
            }
            || ()
        });
    }

    // Checkout that returned into the main tab: reload the bare library later
    {
        let deps = (query.checkout_canceled.clone(), query.close.clone());
        use_effect_with(deps, move |(checkout_canceled, close)| {
            let query = LibraryQuery {
                checkout_canceled: checkout_canceled.clone(),
                close: close.clone(),
            };
            let timer = should_schedule_reload(&query).then(|| {
                log::info!("⏳ [LIBRARY] Reloading in {} ms", CHECKOUT_RELOAD_DELAY_MS);
                Timeout::new(CHECKOUT_RELOAD_DELAY_MS, || {
                    browser::hard_navigate(&Route::Videos.to_path());
                })
            });
            move || drop(timer)
        });
    }

    let content = match select_branch(session.status(), &query, *close_window, &videos) {
        LibraryBranch::Redirecting => return html! {},
        LibraryBranch::Status(message) => render_status(message),
        LibraryBranch::Empty => html! { <EmptyLibrary /> },
        LibraryBranch::Loading => html! {
            <div class="video-grid">
                { for (0..SKELETON_CARD_COUNT).map(|i| html! { <VideoCardSkeleton key={i} /> }) }
            </div>
        },
        LibraryBranch::Loaded(list) => html! {
            <div class="video-grid">
                { for list.iter().map(|video| html! {
                    <VideoCard key={video.id.clone()} video={video.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="library">
            <header class="library-header">
                <Link<Route> to={Route::Home} classes="logo">
                    <img class="logo-image" src="/assets/logo.png" alt="Chitram Logo" />
                </Link<Route>>
                <h1 class="library-title">{"My videos"}</h1>
                <div class="library-actions">
                    <NewVideoMenu />
                    <ProfileMenu />
                </div>
            </header>

            <main class="library-content">{content}</main>

            <RecordModal />
            <UploadModal />
            <Paywall />
        </div>
    }
}
