//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Each collection screen owns its own list slice; queries are never
//!   shared across screens.
//! - The auth slice holds a read-only snapshot of the persisted session;
//!   only the login, registration, and logout flows replace it.

use crate::core::auth::Session;
use crate::core::list::ListState;
use crate::models::{Toast, ToastKind, VideoRow};
use beatly_api_models::OverallStats;
use yewdux::store::Store;

/// Maximum simultaneously visible toasts.
const TOAST_BACKLOG: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session snapshot for the auth gate and shell.
    pub auth: AuthSlice,
    /// Consumer home feed list state.
    pub home: ListState<VideoRow>,
    /// Admin management list state.
    pub manage: ListState<VideoRow>,
    /// Analytics list state plus platform aggregates.
    pub analytics: AnalyticsSlice,
    /// Transient notification queue.
    pub toasts: ToastSlice,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthSlice {
    /// Snapshot of the persisted session, refreshed by auth flows.
    pub session: Option<Session>,
}

/// Analytics screen state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AnalyticsSlice {
    /// Per-video analytics rows.
    pub list: ListState<VideoRow>,
    /// Platform-wide aggregates from the latest fetch.
    pub overall: OverallStats,
}

impl AnalyticsSlice {
    /// Label/value pairs for the aggregate stat cards.
    #[must_use]
    pub fn overview_cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total Videos", self.overall.total_videos.to_string()),
            ("Total Views", self.overall.total_views.to_string()),
            ("Total Likes", self.overall.total_likes.to_string()),
            ("Total Comments", self.overall.total_comments.to_string()),
        ]
    }
}

/// Transient notification queue with a capped backlog.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastSlice {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastSlice {
    /// Append a toast, dropping the oldest entries past the backlog cap.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        if self.items.len() > TOAST_BACKLOG {
            let overflow = self.items.len() - TOAST_BACKLOG;
            self.items.drain(0..overflow);
        }
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::ToastSlice;
    use crate::models::ToastKind;

    #[test]
    fn backlog_is_capped() {
        let mut slice = ToastSlice::default();
        for n in 0..6 {
            slice.push(ToastKind::Info, format!("toast {n}"));
        }
        assert_eq!(slice.items.len(), 4);
        assert_eq!(slice.items.first().map(|t| t.message.as_str()), Some("toast 2"));
    }

    #[test]
    fn dismiss_removes_exactly_one() {
        let mut slice = ToastSlice::default();
        slice.push(ToastKind::Success, "a");
        slice.push(ToastKind::Error, "b");
        let first = slice.items[0].id;
        slice.dismiss(first);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.items[0].message, "b");
    }
}
