// ============================================================================
// SESSION CONTEXT - shares the resolved session with every route
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, use_session_state, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Resolves the session once and provides it to its subtree
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// Session from the nearest provider; outside one, a session that stays loading
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    let context = use_context::<UseSessionHandle>();
    let detached = use_session_state();
    context.unwrap_or(detached)
}
