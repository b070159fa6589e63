pub const APP_NAME: &str = "Chitram";

/// localStorage key holding the anonymous analytics id
pub const STORAGE_KEY_DISTINCT_ID: &str = "chitram_distinctId";

/// Delay before the library reloads after a checkout returns in the main tab
pub const CHECKOUT_RELOAD_DELAY_MS: u32 = 5_000;

/// Size of the popup the paywall opens checkout in
pub const POPUP_WIDTH: u32 = 500;
pub const POPUP_HEIGHT: u32 = 500;

pub const SKELETON_CARD_COUNT: usize = 4;

pub const TERMS_PATH: &str = "/legal/terms";
pub const PRIVACY_PATH: &str = "/legal/privacy-policy";

pub const GITHUB_URL: &str = "https://github.com/hemanth5544/chitram";
pub const SALES_EMAIL: &str = "mailto:sales@chitram.com";
pub const CAPTURE_UNSUPPORTED_MESSAGE: &str = "Your browser is currently NOT supported.";
