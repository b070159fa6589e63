use yew::prelude::*;

use crate::hooks::use_analytics::use_distinct_id;
use crate::services::{fetch_feature_flags, ApiClient};

/// Whether a remote flag is on for this visitor; `false` until resolved.
/// Re-evaluated when the visitor signs in, under the same id analytics uses.
#[hook]
pub fn use_feature_flag(name: &'static str) -> bool {
    let enabled = use_state(|| false);
    let distinct_id = use_distinct_id();

    {
        let enabled = enabled.clone();
        use_effect_with((name, distinct_id), move |(name, distinct_id)| {
            let name = *name;
            let distinct_id = distinct_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_feature_flags(&ApiClient::new(), &distinct_id).await {
                    Ok(flags) => enabled.set(flags.is_enabled(name)),
                    Err(e) => log::warn!("⚠️ Feature flags unavailable: {}", e),
                }
            });
            || ()
        });
    }

    *enabled
}
