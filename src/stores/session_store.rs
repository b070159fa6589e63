// ============================================================================
// SESSION STORE
// ============================================================================
// Held by SessionContextProvider, read by every gated view
// ============================================================================

use crate::models::SessionStatus;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionStore {
    pub status: SessionStatus,
    pub error: Option<String>,
}
