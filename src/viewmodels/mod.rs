pub mod entitlement;
pub mod session_gate;
pub mod video_list_viewmodel;
pub mod pricing_viewmodel;
pub mod card_swap_viewmodel;

pub use entitlement::{check_record, check_upload, ActionOutcome, DenialReason, Entitlement};
pub use session_gate::{protected_redirect, public_redirect};
pub use video_list_viewmodel::{LibraryBranch, StatusMessage};
