//! Video catalog endpoints
//!
//! Listing with optional case-insensitive name search, validated
//! submission, and detail lookup by derived identifier. Validation
//! failures are recovered here and mapped to user-facing messages;
//! none propagate as unhandled faults.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use vidlist_common::db::videos::{self, NewVideo, Video};
use vidlist_common::Error;

use crate::AppState;

/// Warning shown for a submission that fails URL validation
pub const MSG_INVALID_URL: &str = "Invalid YT URL";
/// Warning shown when the derived identifier is already stored
pub const MSG_DUPLICATE: &str = "Video already in list.";
/// Generic warning attached to every failed submission
pub const MSG_UNABLE_TO_SAVE: &str = "Unable to save - check entered data.";

/// Query parameters for the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive name substring; blank returns everything
    pub search_term: Option<String>,
}

/// Listing response with the count phrase used by the UI
#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<Video>,
    pub count: usize,
    pub count_label: String,
}

/// Submission payload
#[derive(Debug, Deserialize)]
pub struct AddVideoRequest {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// User-facing count phrase: "No videos.", "1 video", "N videos"
pub fn count_label(count: usize) -> String {
    match count {
        0 => "No videos.".to_string(),
        1 => "1 video".to_string(),
        n => format!("{} videos", n),
    }
}

/// GET /api/videos?search_term=abc
///
/// Returns videos sorted ascending by lowercased name. With a search
/// term, only names containing it as a case-insensitive substring are
/// returned. An empty result set is a valid outcome.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let videos = videos::list_videos(&state.db, query.search_term.as_deref()).await?;
    let count = videos.len();

    Ok(Json(VideoListResponse {
        count_label: count_label(count),
        count,
        videos,
    }))
}

/// POST /api/videos
///
/// Validates the submission and stores it under the derived identifier.
/// Returns 201 with the stored record, 400 for an invalid URL or blank
/// required field, 409 for a duplicate identifier.
pub async fn add_video(
    State(state): State<AppState>,
    Json(req): Json<AddVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    if req.name.trim().is_empty() || req.url.trim().is_empty() {
        return Err(Error::InvalidInput("name and url are required".to_string()).into());
    }

    let new = NewVideo {
        name: req.name,
        url: req.url,
        notes: req.notes,
    };

    match videos::insert_video(&state.db, &new).await {
        Ok(video) => {
            info!("Added video '{}' ({})", video.name, video.video_id);
            Ok((StatusCode::CREATED, Json(video)))
        }
        Err(e) => {
            warn!("Rejected submission for {}: {}", new.url, e);
            Err(e.into())
        }
    }
}

/// GET /api/videos/:video_id
///
/// Detail lookup by derived identifier; unknown identifiers yield 404.
pub async fn video_detail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let video = videos::get_video(&state.db, &video_id).await?;
    Ok(Json(video))
}

/// Maps repository errors to status codes and user-facing messages
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, messages) = match &self.0 {
            Error::InvalidUrl(_) => (
                StatusCode::BAD_REQUEST,
                vec![MSG_INVALID_URL, MSG_UNABLE_TO_SAVE],
            ),
            Error::Duplicate(_) => (
                StatusCode::CONFLICT,
                vec![MSG_DUPLICATE, MSG_UNABLE_TO_SAVE],
            ),
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, vec![MSG_UNABLE_TO_SAVE]),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, vec![]),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, vec![]),
        };

        let body = Json(json!({
            "error": self.0.to_string(),
            "messages": messages,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_empty() {
        assert_eq!(count_label(0), "No videos.");
    }

    #[test]
    fn count_label_singular() {
        assert_eq!(count_label(1), "1 video");
        assert_ne!(count_label(1), "1 videos");
    }

    #[test]
    fn count_label_plural() {
        assert_eq!(count_label(2), "2 videos");
        assert_eq!(count_label(17), "17 videos");
    }
}
