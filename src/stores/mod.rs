pub mod session_store;
pub mod modal_store;
pub mod videos_store;

pub use session_store::SessionStore;
pub use modal_store::{ModalKind, ModalStore};
pub use videos_store::VideosStore;
