// ============================================================================
// SIGN IN VIEW - one button per identity provider
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Header;
use crate::hooks::use_session_context;
use crate::models::AuthProvider;
use crate::services::{load_providers, sign_in_url, ApiClient};
use crate::utils::browser;
use crate::utils::constants::{APP_NAME, PRIVACY_PATH, TERMS_PATH};
use crate::viewmodels::public_redirect;

#[function_component(SignInView)]
pub fn sign_in_view() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let providers = use_state(|| None::<Vec<AuthProvider>>);

    {
        let status = session.status().clone();
        use_effect_with(status, move |status| {
            if let (Some(route), Some(navigator)) = (public_redirect(status, false), navigator) {
                navigator.push(&route);
            }
            || ()
        });
    }

    {
        let providers = providers.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_providers(&ApiClient::new()).await {
                    Ok(list) => {
                        log::info!("🔑 [SIGN-IN] {} providers", list.len());
                        providers.set(Some(list));
                    }
                    Err(e) => {
                        log::error!("❌ [SIGN-IN] Providers unavailable: {}", e);
                        providers.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_provider = |provider: &AuthProvider| {
        let provider = provider.clone();
        Callback::from(move |_: MouseEvent| {
            let client = ApiClient::new();
            let origin = browser::current_origin().unwrap_or_default();
            let callback = format!("{}{}", origin, Route::Videos.to_path());
            match sign_in_url(&client, &provider, &callback) {
                Ok(url) => browser::hard_navigate(&url),
                Err(e) => log::error!("❌ [SIGN-IN] {}", e),
            }
        })
    };

    html! {
        <div class="sign-in">
            <Header />
            <section class="sign-in-card">
                <h1>{format!("Sign in to {}", APP_NAME)}</h1>
                {
                    match &*providers {
                        None => html! { <div class="spinner"></div> },
                        Some(list) if list.is_empty() => html! {
                            <p class="sign-in-error">{"Sign in is unavailable right now. Try again later."}</p>
                        },
                        Some(list) => html! {
                            <div class="sign-in-providers">
                                { for list.iter().map(|provider| html! {
                                    <button key={provider.id.clone()} class="btn-outline btn-block" onclick={on_provider(provider)}>
                                        {format!("Continue with {}", provider.name)}
                                    </button>
                                }) }
                            </div>
                        },
                    }
                }
                <p class="sign-in-legal">
                    {"By signing in, you agree to our "}
                    <a href={TERMS_PATH}>{"Terms of Service"}</a>
                    {" and "}
                    <a href={PRIVACY_PATH}>{"Privacy Policy"}</a>
                    {"."}
                </p>
            </section>
        </div>
    }
}
