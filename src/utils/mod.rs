// Shared helpers

pub mod constants;
pub mod storage;
pub mod time;
pub mod browser;

pub use constants::*;
pub use storage::*;
pub use time::format_relative_time;
