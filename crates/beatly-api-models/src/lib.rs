#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Beatly REST API.
//!
//! These types mirror the wire contract of the external Beatly backend so the
//! client decodes every response through one set of definitions. Field names
//! follow the backend's camelCase JSON; document ids arrive as opaque `_id`
//! strings and stay opaque here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Plain-text password; transported over TLS, never stored client-side.
    pub password: String,
    /// Requested role; self-service signup always sends `consumer`.
    pub role: String,
}

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Authentication response shared by login and registration.
///
/// Registration may omit the token when the backend requires a subsequent
/// explicit login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The authenticated (or newly created) account.
    pub user: UserDoc,
    /// Bearer token to attach to authenticated requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Account document as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    /// Opaque document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, omitted from some projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Access-control role as a raw string; the client validates it against
    /// its known role set and treats anything else as an authorization
    /// failure rather than defaulting.
    pub role: String,
}

/// Like data attached to a video document.
///
/// The backend serves either a plain count or the full set of liker ids
/// depending on the projection, so both shapes decode through one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Likes {
    /// Aggregate count only.
    Count(u64),
    /// Full set of user ids that liked the video.
    Ids(Vec<String>),
}

impl Likes {
    /// Number of likes regardless of projection.
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            Self::Count(count) => *count,
            Self::Ids(ids) => ids.len() as u64,
        }
    }

    /// Whether the given user id appears in the like set. Count-only
    /// projections carry no membership data and always answer `false`.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        match self {
            Self::Count(_) => false,
            Self::Ids(ids) => ids.iter().any(|id| id == user_id),
        }
    }
}

impl Default for Likes {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Video document as served by the list, detail, and analytics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDoc {
    /// Opaque document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Video title.
    pub title: String,
    /// Long-form description, omitted from list projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form tags attached at upload time.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Thumbnail URL when one was uploaded or generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Playable media URL, present on detail projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// Like count or membership set.
    #[serde(default)]
    pub likes: Likes,
    /// Number of comments on the video.
    #[serde(default)]
    pub comment_count: u64,
    /// Display name of the uploading account, present on stats projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
    /// Upload timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Comment document attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    /// Opaque document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the author; older documents omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Comment body.
    pub text: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Comment creation body for `POST /api/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    /// Comment body; the client rejects blank text before sending.
    pub text: String,
    /// Target video id.
    pub video_id: String,
}

/// Pagination envelope attached to collection responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page that was served.
    pub current_page: u32,
    /// Total number of pages for the query.
    pub total_pages: u32,
    /// Total matching videos across all pages.
    pub total_videos: u64,
    /// Page size that was applied.
    #[serde(default)]
    pub limit: u32,
}

/// Response body of `GET /api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoListResponse {
    /// One page of video documents in requested order.
    pub videos: Vec<VideoDoc>,
    /// Pagination metadata for the page.
    pub pagination: Pagination,
}

/// Response body of `GET /api/videos/:id` and `GET /api/videos/:id/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoDetailResponse {
    /// The video document with detail projection.
    pub video: VideoDoc,
    /// Comments in server order.
    #[serde(default)]
    pub comments: Vec<CommentDoc>,
}

/// Response body of `POST /api/videos/:id/like`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    /// Authoritative like state after the toggle.
    pub likes: Likes,
    /// Authoritative like count after the toggle.
    pub total_likes: u64,
}

/// Platform-wide aggregates served with the analytics listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    /// Total videos on the platform.
    pub total_videos: u64,
    /// Total views across all videos.
    pub total_views: u64,
    /// Total likes across all videos.
    pub total_likes: u64,
    /// Total comments across all videos.
    pub total_comments: u64,
}

/// Response body of `GET /api/videos/all-analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// One page of video documents with analytics projection.
    pub videos: Vec<VideoDoc>,
    /// Platform-wide aggregates.
    pub overall_stats: OverallStats,
    /// Pagination metadata for the page.
    pub pagination: Pagination,
}

/// Error document surfaced by the backend on non-2xx responses.
///
/// None of the fields is guaranteed; the client walks them in order
/// (`details`, then `message`, then `error`) and falls back to transport
/// information when the body is absent or carries none of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Detailed diagnostic message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Generic error label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{ErrorBody, Likes, Pagination, VideoDetailResponse, VideoDoc, VideoListResponse};

    #[test]
    fn likes_decode_from_count_and_ids() {
        let count: Likes = serde_json::from_str("7").expect("count form");
        assert_eq!(count.count(), 7);
        assert!(!count.contains("u1"));

        let ids: Likes = serde_json::from_str(r#"["u1","u2"]"#).expect("ids form");
        assert_eq!(ids.count(), 2);
        assert!(ids.contains("u2"));
        assert!(!ids.contains("u3"));
    }

    #[test]
    fn video_doc_tolerates_sparse_projections() {
        let doc: VideoDoc = serde_json::from_str(
            r#"{"_id":"v1","title":"First upload"}"#,
        )
        .expect("minimal doc");
        assert_eq!(doc.id, "v1");
        assert_eq!(doc.views, 0);
        assert_eq!(doc.likes.count(), 0);
        assert!(doc.tags.is_empty());
        assert!(doc.created_at.is_none());
    }

    #[test]
    fn list_response_decodes_nested_pagination() {
        let body = r#"{
            "videos": [{"_id":"v1","title":"One","views":3,"likes":["u1"]}],
            "pagination": {"currentPage":2,"totalPages":5,"totalVideos":91,"limit":20}
        }"#;
        let list: VideoListResponse = serde_json::from_str(body).expect("list body");
        assert_eq!(list.videos.len(), 1);
        assert_eq!(list.videos[0].likes.count(), 1);
        assert_eq!(
            list.pagination,
            Pagination {
                current_page: 2,
                total_pages: 5,
                total_videos: 91,
                limit: 20,
            }
        );
    }

    #[test]
    fn detail_response_defaults_missing_comments() {
        let detail: VideoDetailResponse = serde_json::from_str(
            r#"{"video":{"_id":"v1","title":"One","url":"https://cdn/v1.mp4"}}"#,
        )
        .expect("detail body");
        assert!(detail.comments.is_empty());
        assert_eq!(detail.video.url.as_deref(), Some("https://cdn/v1.mp4"));
    }

    #[test]
    fn error_body_fields_are_all_optional() {
        let empty: ErrorBody = serde_json::from_str("{}").expect("empty body");
        assert_eq!(empty, ErrorBody::default());

        let partial: ErrorBody =
            serde_json::from_str(r#"{"error":"Upload failed"}"#).expect("partial body");
        assert_eq!(partial.error.as_deref(), Some("Upload failed"));
        assert!(partial.details.is_none());
    }
}
