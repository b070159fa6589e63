use chrono::Utc;
use yew::prelude::*;

use crate::models::VideoSummary;
use crate::utils::format_relative_time;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoSummary,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let created = format_relative_time(video.created_at, Utc::now());

    html! {
        <a class="video-card" href={video.share_path()}>
            <div class="video-card-thumb">
                <img src={video.thumbnail_url.clone()} alt={video.title.clone()} loading="lazy" />
            </div>
            <div class="video-card-body">
                <h3 class="video-card-title">{video.title.clone()}</h3>
                <p class="video-card-meta">{created}</p>
            </div>
        </a>
    }
}

#[function_component(VideoCardSkeleton)]
pub fn video_card_skeleton() -> Html {
    html! {
        <div class="video-card video-card-skeleton">
            <div class="video-card-thumb skeleton"></div>
            <div class="video-card-body">
                <div class="skeleton skeleton-line"></div>
                <div class="skeleton skeleton-line short"></div>
            </div>
        </div>
    }
}
