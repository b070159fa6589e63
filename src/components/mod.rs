pub mod header;
pub mod footer;
pub mod cta;
pub mod card_swap;
pub mod modal_frame;
pub mod record_modal;
pub mod upload_modal;
pub mod paywall;
pub mod billing_toggle;
pub mod new_video_menu;
pub mod profile_menu;
pub mod tooltip;
pub mod video_card;

pub use header::Header;
pub use footer::Footer;
pub use cta::Cta;
pub use card_swap::{Card, CardSwap};
pub use modal_frame::ModalFrame;
pub use record_modal::RecordModal;
pub use upload_modal::UploadModal;
pub use paywall::Paywall;
pub use billing_toggle::BillingToggle;
pub use new_video_menu::NewVideoMenu;
pub use profile_menu::ProfileMenu;
pub use tooltip::Tooltip;
pub use video_card::{VideoCard, VideoCardSkeleton};
