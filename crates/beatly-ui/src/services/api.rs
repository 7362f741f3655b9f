//! HTTP client for the Beatly REST API.
//!
//! # Design
//! - One client per app boot; the bearer token is read from the session store
//!   at call time, so auth changes need no client rebuild.
//! - Ordinary JSON calls share a short timeout; the multipart upload gets a
//!   much longer one because large binary payloads must not be cut off by a
//!   timeout sized for small JSON exchanges.
//! - Non-2xx responses map to [`ApiError`] through the message fallback chain
//!   in [`crate::core::logic::error_message`].

use crate::core::list::ListQuery;
use crate::core::logic::error_message;
use crate::core::session::SessionStore;
use crate::models::UploadInput;
use beatly_api_models::{
    AnalyticsResponse, AuthResponse, CommentCreateRequest, LikeResponse, LoginRequest,
    RegisterRequest, VideoDetailResponse, VideoListResponse,
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{AbortController, FormData};

/// Timeout for ordinary JSON exchanges.
const JSON_TIMEOUT_MS: u32 = 10_000;
/// Timeout for the multipart video upload.
const UPLOAD_TIMEOUT_MS: u32 = 60_000;

/// Structured failure from an API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    /// HTTP status, or 0 when the request never produced a response.
    pub status: u16,
    /// Human-readable message derived through the fallback chain.
    pub message: String,
}

impl ApiError {
    fn transport(detail: &str) -> Self {
        Self {
            status: 0,
            message: error_message(None, Some(detail)),
        }
    }

    /// Whether the server rejected the session outright.
    pub(crate) const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// REST client with typed endpoint constructors.
#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the bearer token when one is stored. A missing token sends the
    /// request unauthenticated and lets the server decide.
    fn authorize(&self, request: Request) -> Request {
        match self.session.token() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send a request with a deadline. The timeout aborts through the same
    /// controller a caller may hold for its own cancellation, so either
    /// source of abort wins cleanly.
    async fn execute(
        request: Request,
        timeout_ms: u32,
        controller: Option<AbortController>,
    ) -> Result<Response, ApiError> {
        let controller = controller.or_else(|| AbortController::new().ok());
        let (request, _deadline) = match &controller {
            Some(ctrl) => {
                let abort = ctrl.clone();
                let deadline = Timeout::new(timeout_ms, move || abort.abort());
                (request.abort_signal(Some(&ctrl.signal())), Some(deadline))
            }
            None => (request, None),
        };
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(&err.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.ok();
            Err(ApiError {
                status,
                message: error_message(body.as_deref(), None),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::transport(&err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        controller: Option<AbortController>,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::get(&self.url(path)));
        let response = Self::execute(request, JSON_TIMEOUT_MS, controller).await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::transport(&err.to_string()))?;
        let response = Self::execute(request, JSON_TIMEOUT_MS, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/register", request).await
    }

    pub(crate) async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/login", request).await
    }

    pub(crate) async fn fetch_videos(
        &self,
        query: &ListQuery,
        controller: Option<AbortController>,
    ) -> Result<VideoListResponse, ApiError> {
        self.get_json(&format!("/api/videos?{}", query.to_query_string()), controller)
            .await
    }

    pub(crate) async fn fetch_analytics(
        &self,
        query: &ListQuery,
        controller: Option<AbortController>,
    ) -> Result<AnalyticsResponse, ApiError> {
        self.get_json(
            &format!("/api/videos/all-analytics?{}", query.to_query_string()),
            controller,
        )
        .await
    }

    pub(crate) async fn fetch_video_detail(&self, id: &str) -> Result<VideoDetailResponse, ApiError> {
        self.get_json(&format!("/api/videos/{id}"), None).await
    }

    pub(crate) async fn fetch_video_stats(&self, id: &str) -> Result<VideoDetailResponse, ApiError> {
        self.get_json(&format!("/api/videos/{id}/stats"), None).await
    }

    pub(crate) async fn toggle_like(&self, id: &str) -> Result<LikeResponse, ApiError> {
        let request = self.authorize(Request::post(&self.url(&format!("/api/videos/{id}/like"))));
        let response = Self::execute(request, JSON_TIMEOUT_MS, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_video(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authorize(Request::delete(&self.url(&format!("/api/videos/{id}"))));
        Self::execute(request, JSON_TIMEOUT_MS, None).await.map(|_| ())
    }

    pub(crate) async fn add_comment(&self, request: &CommentCreateRequest) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url("/api/comments")))
            .json(request)
            .map_err(|err| ApiError::transport(&err.to_string()))?;
        Self::execute(request, JSON_TIMEOUT_MS, None).await.map(|_| ())
    }

    /// Multipart upload of a video with an optional thumbnail. Uses the long
    /// deadline; the success body is not consumed because callers re-fetch
    /// their lists afterwards.
    pub(crate) async fn upload_video(&self, input: UploadInput) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|_| ApiError {
            status: 0,
            message: "Could not build the upload form".to_string(),
        })?;
        let _ = form.append_with_str("title", &input.title);
        let _ = form.append_with_str("description", &input.description);
        let _ = form.append_with_str("tags", &input.tags.join(","));
        form.append_with_blob_and_filename("video", &input.video, &input.video.name())
            .map_err(|_| ApiError {
                status: 0,
                message: "Could not attach the video file".to_string(),
            })?;
        if let Some(thumbnail) = &input.thumbnail {
            let _ = form.append_with_blob_and_filename("thumbnail", thumbnail, &thumbnail.name());
        }
        let request = self
            .authorize(Request::post(&self.url("/api/videos/upload")))
            .body(form);
        Self::execute(request, UPLOAD_TIMEOUT_MS, None).await.map(|_| ())
    }
}
