//! HTTP API handlers for vidlist-ui

pub mod health;
pub mod ui;
pub mod videos;

pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};
pub use videos::{add_video, list_videos, video_detail};
