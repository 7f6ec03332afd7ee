//! Database schema and video repository queries

pub mod init;
pub mod videos;

pub use init::init_database;
pub use videos::{get_video, insert_video, list_videos, NewVideo, Video};
