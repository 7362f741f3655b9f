//! Pure conversions for the analytics screen.

use crate::core::list::ListResult;
use crate::models::VideoRow;
use beatly_api_models::{AnalyticsResponse, OverallStats};

/// Split an analytics response into the list snapshot and the aggregates.
#[must_use]
pub fn analytics_result(response: AnalyticsResponse) -> (ListResult<VideoRow>, OverallStats) {
    let pagination = response.pagination;
    let result = ListResult {
        items: response.videos.into_iter().map(VideoRow::from).collect(),
        current_page: pagination.current_page.max(1),
        total_pages: pagination.total_pages.max(1),
        total_count: pagination.total_videos,
    };
    (result, response.overall_stats)
}

#[cfg(test)]
mod tests {
    use super::analytics_result;
    use beatly_api_models::{AnalyticsResponse, OverallStats, Pagination};

    #[test]
    fn aggregates_ride_along_with_the_page() {
        let response = AnalyticsResponse {
            videos: vec![],
            overall_stats: OverallStats {
                total_videos: 12,
                total_views: 340,
                total_likes: 56,
                total_comments: 7,
            },
            pagination: Pagination {
                current_page: 1,
                total_pages: 1,
                total_videos: 12,
                limit: 20,
            },
        };
        let (result, overall) = analytics_result(response);
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 12);
        assert_eq!(overall.total_views, 340);
    }
}
