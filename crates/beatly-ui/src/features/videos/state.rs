//! Pure conversions and input rules for the video screens.

use crate::core::list::ListResult;
use crate::models::VideoRow;
use beatly_api_models::VideoListResponse;

/// Convert a list response into the controller's result snapshot.
#[must_use]
pub fn list_result(response: VideoListResponse) -> ListResult<VideoRow> {
    let pagination = response.pagination;
    ListResult {
        items: response.videos.into_iter().map(VideoRow::from).collect(),
        current_page: pagination.current_page.max(1),
        total_pages: pagination.total_pages.max(1),
        total_count: pagination.total_videos,
    }
}

/// Normalize a draft comment, rejecting empty or whitespace-only text before
/// it can reach the API.
#[must_use]
pub fn validate_comment(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{list_result, validate_comment};
    use beatly_api_models::{Pagination, VideoDoc, VideoListResponse};

    #[test]
    fn blank_comments_are_rejected() {
        assert_eq!(validate_comment(""), None);
        assert_eq!(validate_comment("  \n\t"), None);
        assert_eq!(validate_comment("  great track  "), Some("great track".to_string()));
    }

    #[test]
    fn list_result_clamps_degenerate_pagination() {
        let response = VideoListResponse {
            videos: vec![VideoDoc {
                id: "v1".to_string(),
                title: "One".to_string(),
                description: None,
                tags: vec![],
                thumbnail: None,
                url: None,
                views: 0,
                likes: beatly_api_models::Likes::Count(0),
                comment_count: 0,
                uploader_name: None,
                created_at: None,
            }],
            pagination: Pagination {
                current_page: 0,
                total_pages: 0,
                total_videos: 1,
                limit: 20,
            },
        };
        let result = list_result(response);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.items.len(), 1);
    }
}
