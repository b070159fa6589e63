// ============================================================================
// USE SESSION HOOK
// ============================================================================
// Resolves the identity provider session once on mount. Consumers read it
// through SessionContextProvider instead of calling this directly.
// ============================================================================

use yew::prelude::*;

use crate::models::SessionStatus;
use crate::services::{auth_service, ApiClient, ApiError};
use crate::stores::SessionStore;
use crate::utils::{browser, remove_from_storage, STORAGE_KEY_DISTINCT_ID};

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub sign_out: Callback<()>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

impl UseSessionHandle {
    pub fn status(&self) -> &SessionStatus {
        &self.state.status
    }
}

/// A failed lookup signs the viewer out; a 401/403 is a plain answer, not an error
pub fn store_for_error(error: &ApiError) -> SessionStore {
    SessionStore {
        status: SessionStatus::Unauthenticated,
        error: (!error.is_unauthorized()).then(|| error.to_string()),
    }
}

fn resolve(state: UseStateHandle<SessionStore>) {
    wasm_bindgen_futures::spawn_local(async move {
        let client = ApiClient::new();
        match auth_service::fetch_session(&client).await {
            Ok(status) => state.set(SessionStore { status, error: None }),
            Err(e) => {
                if e.is_unauthorized() {
                    log::info!("👤 [SESSION] Identity provider refused the session");
                } else {
                    log::error!("❌ [SESSION] Lookup failed: {}", e);
                }
                state.set(store_for_error(&e));
            }
        }
    });
}

/// Session state with its sign-out command but no fetch on mount
#[hook]
pub fn use_session_state() -> UseSessionHandle {
    let state = use_state(SessionStore::default);

    let sign_out = Callback::from(|_| {
        log::info!("👋 Signing out");
        remove_from_storage(STORAGE_KEY_DISTINCT_ID);
        browser::hard_navigate(&auth_service::sign_out_url(&ApiClient::new()));
    });

    UseSessionHandle { state, sign_out }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let handle = use_session_state();

    {
        let state = handle.state.clone();
        use_effect_with((), move |_| {
            resolve(state);
            || ()
        });
    }

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_session_signs_out_without_error() {
        let store = store_for_error(&ApiError::Http { status: 401, body: String::new() });
        assert_eq!(store.status, SessionStatus::Unauthenticated);
        assert_eq!(store.error, None);
    }

    #[test]
    fn unreachable_provider_signs_out_and_keeps_the_error() {
        let store = store_for_error(&ApiError::Network("offline".to_string()));
        assert!(store.status.is_unauthenticated());
        assert_eq!(store.error.as_deref(), Some("Network error: offline"));
    }
}
