use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the caller's library, as returned by the videos endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub thumbnail_url: String,
}

impl VideoSummary {
    pub fn share_path(&self) -> String {
        format!("/share/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let body = r#"[{
            "id": "clx1",
            "title": "Sprint demo",
            "createdAt": "2026-10-01T12:00:00Z",
            "thumbnailUrl": "https://cdn.example.com/clx1.png"
        }]"#;
        let videos: Vec<VideoSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Sprint demo");
        assert_eq!(videos[0].share_path(), "/share/clx1");
    }
}
