//! View models decoupling screens from wire DTOs.

use crate::core::logic::date_label;
use beatly_api_models::{CommentDoc, LikeResponse, VideoDetailResponse, VideoDoc};

#[cfg(target_arch = "wasm32")]
use web_sys::File;

/// Video snapshot rendered by the card grids and analytics table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRow {
    /// Stable video id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Thumbnail URL when available.
    pub thumbnail: Option<String>,
    /// View count.
    pub views: u64,
    /// Like count.
    pub likes: u64,
    /// Comment count.
    pub comments: u64,
    /// Human-readable upload date.
    pub created_label: String,
}

impl From<VideoDoc> for VideoRow {
    fn from(doc: VideoDoc) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            thumbnail: doc.thumbnail,
            views: doc.views,
            likes: doc.likes.count(),
            comments: doc.comment_count,
            created_label: date_label(doc.created_at.as_ref()),
        }
    }
}

/// Comment snapshot rendered under a video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRow {
    /// Stable comment id.
    pub id: String,
    /// Author display name.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// Human-readable creation date.
    pub created_label: String,
}

impl From<CommentDoc> for CommentRow {
    fn from(doc: CommentDoc) -> Self {
        Self {
            id: doc.id,
            author: doc.user_name.unwrap_or_else(|| "Anonymous".to_string()),
            text: doc.text,
            created_label: date_label(doc.created_at.as_ref()),
        }
    }
}

/// Full video detail shown on the watch and stats screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoDetail {
    /// Stable video id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Playable media URL when served.
    pub url: Option<String>,
    /// Thumbnail/poster URL when served.
    pub thumbnail: Option<String>,
    /// Tags attached at upload time.
    pub tags: Vec<String>,
    /// View count.
    pub views: u64,
    /// Like count.
    pub likes: u64,
    /// Whether the viewing user has liked the video; drives button styling
    /// only, the count always comes from the server.
    pub is_liked: bool,
    /// Uploader display name when served.
    pub uploader: Option<String>,
    /// Human-readable upload date.
    pub created_label: String,
    /// Comments in server order.
    pub comments: Vec<CommentRow>,
}

impl VideoDetail {
    /// Build the view model from a detail response, resolving like membership
    /// for the viewing user where the projection carries it.
    #[must_use]
    pub fn from_response(response: VideoDetailResponse, viewer_id: Option<&str>) -> Self {
        let video = response.video;
        let is_liked = viewer_id.is_some_and(|id| video.likes.contains(id));
        Self {
            id: video.id,
            title: video.title,
            description: video.description.unwrap_or_default(),
            url: video.url,
            thumbnail: video.thumbnail,
            tags: video.tags,
            views: video.views,
            likes: video.likes.count(),
            is_liked,
            uploader: video.uploader_name,
            created_label: date_label(video.created_at.as_ref()),
            comments: response.comments.into_iter().map(CommentRow::from).collect(),
        }
    }

    /// Replace like state from the server's authoritative toggle response.
    ///
    /// The count is never incremented locally. When the response carries the
    /// membership set, `is_liked` follows it; a count-only response can only
    /// flip the previous value.
    pub fn apply_like(&mut self, response: &LikeResponse, viewer_id: Option<&str>) {
        self.likes = response.total_likes;
        self.is_liked = match (&response.likes, viewer_id) {
            (beatly_api_models::Likes::Ids(_), Some(id)) => response.likes.contains(id),
            _ => !self.is_liked,
        };
    }
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    /// Message body.
    pub message: String,
    /// Visual severity.
    pub kind: ToastKind,
}

/// Validated upload payload handed to the API client.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct UploadInput {
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// Normalized tags.
    pub tags: Vec<String>,
    /// The video file itself.
    pub video: File,
    /// Optional thumbnail image.
    pub thumbnail: Option<File>,
}

#[cfg(test)]
mod tests {
    use super::{CommentRow, VideoDetail, VideoRow};
    use beatly_api_models::{CommentDoc, LikeResponse, Likes, VideoDetailResponse, VideoDoc};

    fn doc(id: &str) -> VideoDoc {
        VideoDoc {
            id: id.to_string(),
            title: "Morning loops".to_string(),
            description: Some("Synth practice".to_string()),
            tags: vec!["synth".to_string()],
            thumbnail: None,
            url: Some("https://cdn/v.mp4".to_string()),
            views: 12,
            likes: Likes::Ids(vec!["u2".to_string()]),
            comment_count: 1,
            uploader_name: None,
            created_at: None,
        }
    }

    #[test]
    fn row_conversion_counts_likes() {
        let row = VideoRow::from(doc("v1"));
        assert_eq!(row.id, "v1");
        assert_eq!(row.likes, 1);
        assert_eq!(row.comments, 1);
        assert_eq!(row.created_label, "Unknown date");
    }

    #[test]
    fn comment_author_falls_back_to_anonymous() {
        let row = CommentRow::from(CommentDoc {
            id: "c1".to_string(),
            user_name: None,
            text: "nice".to_string(),
            created_at: None,
        });
        assert_eq!(row.author, "Anonymous");
    }

    #[test]
    fn detail_resolves_like_membership_for_the_viewer() {
        let response = VideoDetailResponse { video: doc("v1"), comments: vec![] };
        let liked = VideoDetail::from_response(response.clone(), Some("u2"));
        assert!(liked.is_liked);
        let not_liked = VideoDetail::from_response(response, Some("u9"));
        assert!(!not_liked.is_liked);
    }

    #[test]
    fn like_toggle_takes_the_server_count_not_an_increment() {
        let response = VideoDetailResponse { video: doc("v1"), comments: vec![] };
        let mut detail = VideoDetail::from_response(response, Some("u9"));
        assert_eq!(detail.likes, 1);
        assert!(!detail.is_liked);

        // The server reports a jump the client could not have predicted.
        detail.apply_like(
            &LikeResponse {
                likes: Likes::Ids(vec!["u2".to_string(), "u5".to_string(), "u9".to_string()]),
                total_likes: 3,
            },
            Some("u9"),
        );
        assert!(detail.is_liked);
        assert_eq!(detail.likes, 3);
    }

    #[test]
    fn count_only_like_response_flips_the_flag() {
        let response = VideoDetailResponse { video: doc("v1"), comments: vec![] };
        let mut detail = VideoDetail::from_response(response, Some("u9"));
        detail.apply_like(&LikeResponse { likes: Likes::Count(2), total_likes: 2 }, Some("u9"));
        assert!(detail.is_liked);
        assert_eq!(detail.likes, 2);
        detail.apply_like(&LikeResponse { likes: Likes::Count(1), total_likes: 1 }, Some("u9"));
        assert!(!detail.is_liked);
    }
}
