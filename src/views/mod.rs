pub mod landing;
pub mod pricing;
pub mod sign_in;
pub mod video_list;
pub mod not_found;

pub use landing::LandingView;
pub use pricing::PricingView;
pub use sign_in::SignInView;
pub use video_list::VideoListView;
pub use not_found::NotFoundView;
