use crate::models::VideoSummary;

/// Library fetch state. `videos` is `None` until a response arrives.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VideosStore {
    pub videos: Option<Vec<VideoSummary>>,
    pub error: Option<String>,
}

impl VideosStore {
    pub fn loaded(videos: Vec<VideoSummary>) -> Self {
        Self {
            videos: Some(videos),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            videos: None,
            error: Some(error),
        }
    }
}
