use crate::models::VideoSummary;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub const VIDEOS_PATH: &str = "/api/videos";

/// Lists the caller's videos in server order
pub async fn fetch_videos(client: &ApiClient) -> Result<Vec<VideoSummary>, ApiError> {
    log::info!("📼 Fetching video library...");
    let videos = client.get_json::<Vec<VideoSummary>>(VIDEOS_PATH).await?;
    log::info!("✅ Videos loaded: {}", videos.len());
    Ok(videos)
}
