// ============================================================================
// MODAL CONTEXT - record / upload / paywall dialogs
// ============================================================================
// One ModalStore per provider; views change it only via `open` / `close`.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::stores::{ModalKind, ModalStore};
use crate::utils::browser;

#[derive(Clone)]
pub struct UseModalsHandle {
    pub state: UseStateHandle<ModalStore>,
    pub open: Callback<ModalKind>,
    pub close: Callback<ModalKind>,
}

impl PartialEq for UseModalsHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

impl UseModalsHandle {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.state.is_open(kind)
    }
}

#[hook]
fn use_modal_state() -> UseModalsHandle {
    let state = use_state(ModalStore::default);

    let open = {
        let state = state.clone();
        Callback::from(move |kind: ModalKind| {
            log::info!("🪟 Opening {:?} dialog", kind);
            state.set(state.open(kind));
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |kind: ModalKind| {
            state.set(state.close(kind));
        })
    };

    UseModalsHandle { state, open, close }
}

#[derive(Properties, PartialEq)]
pub struct ModalContextProviderProps {
    pub children: Children,
}

#[function_component(ModalContextProvider)]
pub fn modal_context_provider(props: &ModalContextProviderProps) -> Html {
    let handle = use_modal_state();

    // Navigating away dismisses whatever dialog was up
    {
        let state = handle.state.clone();
        let path = use_location().map(|location| location.path().to_string());
        use_effect_with(path, move |_| {
            if state.any_open() {
                state.set(state.close_all());
            }
            || ()
        });
    }

    // Lock page scroll while any dialog is up
    {
        let any_open = handle.state.any_open();
        use_effect_with(any_open, move |open| {
            browser::set_body_class("modal-open", *open);
            || ()
        });
    }

    html! {
        <ContextProvider<UseModalsHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseModalsHandle>>
    }
}

/// Dialog state from the nearest provider, or a local store outside one
#[hook]
pub fn use_modals() -> UseModalsHandle {
    let context = use_context::<UseModalsHandle>();
    let local = use_modal_state();
    context.unwrap_or(local)
}
