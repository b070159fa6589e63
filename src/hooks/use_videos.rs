use yew::prelude::*;

use crate::services::{fetch_videos, ApiClient};
use crate::stores::VideosStore;

/// Loads the library once the caller is known to be signed in
#[hook]
pub fn use_videos(authenticated: bool) -> UseStateHandle<VideosStore> {
    let state = use_state(VideosStore::default);

    {
        let state = state.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_videos(&ApiClient::new()).await {
                        Ok(videos) => state.set(VideosStore::loaded(videos)),
                        Err(e) => {
                            log::error!("❌ Video list fetch failed: {}", e);
                            state.set(VideosStore::failed(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    state
}
