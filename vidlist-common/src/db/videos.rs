//! Video repository queries
//!
//! Insert, listing, and detail lookup for catalog records. The video
//! identifier is derived from the submitted URL at insert time; callers
//! never supply it.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::watch_url;

/// A stored catalog record
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub guid: String,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
    pub created_at: NaiveDateTime,
}

/// Caller-supplied fields of a submission
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
}

fn video_from_row(row: &SqliteRow) -> Video {
    Video {
        guid: row.get("guid"),
        name: row.get("name"),
        url: row.get("url"),
        notes: row.get("notes"),
        video_id: row.get("video_id"),
        created_at: row.get("created_at"),
    }
}

/// Insert a new video
///
/// Validates the URL, derives the identifier, and inserts under a fresh
/// guid. A second record with the same derived identifier fails with
/// `Error::Duplicate` at the UNIQUE constraint; nothing is persisted for
/// an invalid URL.
pub async fn insert_video(db: &SqlitePool, new: &NewVideo) -> Result<Video> {
    let video_id = watch_url::extract_video_id(&new.url)?;
    let guid = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO videos (guid, name, url, notes, video_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&guid)
    .bind(&new.name)
    .bind(&new.url)
    .bind(&new.notes)
    .bind(&video_id)
    .execute(db)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return Error::Duplicate(video_id.clone());
            }
        }
        Error::Database(e)
    })?;

    get_video(db, &video_id).await
}

/// List videos, optionally filtered by a case-insensitive name substring
///
/// Results are ordered ascending by lowercased name; equal keys keep
/// insertion order (rowid tiebreak). A blank search term returns the
/// whole collection.
pub async fn list_videos(db: &SqlitePool, search: Option<&str>) -> Result<Vec<Video>> {
    let term = search.map(str::trim).filter(|t| !t.is_empty());

    let rows = match term {
        Some(term) => {
            sqlx::query(
                "SELECT guid, name, url, notes, video_id, created_at
                 FROM videos
                 WHERE instr(lower(name), lower(?)) > 0
                 ORDER BY lower(name) ASC, rowid ASC",
            )
            .bind(term)
            .fetch_all(db)
            .await?
        }
        None => {
            sqlx::query(
                "SELECT guid, name, url, notes, video_id, created_at
                 FROM videos
                 ORDER BY lower(name) ASC, rowid ASC",
            )
            .fetch_all(db)
            .await?
        }
    };

    Ok(rows.iter().map(video_from_row).collect())
}

/// Get a video by its derived identifier
pub async fn get_video(db: &SqlitePool, video_id: &str) -> Result<Video> {
    let row = sqlx::query(
        "SELECT guid, name, url, notes, video_id, created_at
         FROM videos
         WHERE video_id = ?",
    )
    .bind(video_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| Error::NotFound(video_id.to_string()))?;

    Ok(video_from_row(&row))
}

/// Count stored videos
pub async fn count_videos(db: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
        .fetch_one(db)
        .await?;
    Ok(count)
}
