pub mod use_session;
pub mod session_context;
pub mod modal_context;
pub mod use_videos;
pub mod use_analytics;
pub mod use_feature_flag;
pub mod use_video_actions;

pub use use_session::{use_session, use_session_state, UseSessionHandle};
pub use session_context::{use_session_context, SessionContextProvider};
pub use modal_context::{use_modals, ModalContextProvider, UseModalsHandle};
pub use use_videos::use_videos;
pub use use_analytics::{use_analytics, use_distinct_id};
pub use use_feature_flag::use_feature_flag;
pub use use_video_actions::{use_record_action, use_upload_action};
