//! Shared wiring between the list controller and collection screens.
//!
//! Each screen owns a list slice in the store; these helpers close over a
//! lens to that slice so the fetch lifecycle, the stale-response guard, and
//! the pager/sort callbacks are defined exactly once.

use crate::components::pager::PageMove;
use crate::core::list::{ListResult, ListState, SortKey, SortOrder};
use crate::core::session::SessionStore;
use crate::core::store::AppStore;
use crate::models::{ToastKind, VideoRow};
use crate::services::api::ApiError;
use yew::Callback;
use yewdux::prelude::Dispatch;

/// Lens selecting one screen's list slice inside the store.
pub(crate) type ListLens = fn(&mut AppStore) -> &mut ListState<VideoRow>;

/// Start a fetch on the slice and return its sequence id.
pub(crate) fn begin(dispatch: &Dispatch<AppStore>, lens: ListLens) -> u64 {
    let mut seq = 0;
    dispatch.reduce_mut(|store| seq = lens(store).begin_fetch());
    seq
}

/// Apply a fetch outcome to the slice under the staleness guard. A 401
/// invalidates the session instead of surfacing an error banner; the route
/// guard then redirects to login.
pub(crate) fn apply(
    dispatch: &Dispatch<AppStore>,
    lens: ListLens,
    session: &SessionStore,
    seq: u64,
    outcome: Result<ListResult<VideoRow>, ApiError>,
) {
    match outcome {
        Ok(result) => dispatch.reduce_mut(|store| {
            lens(store).apply_success(seq, result);
        }),
        Err(err) if err.is_unauthorized() => {
            session.clear();
            dispatch.reduce_mut(|store| store.auth.session = None);
        }
        Err(err) => dispatch.reduce_mut(|store| {
            if lens(store).apply_failure(seq, err.message.clone()) {
                store.toasts.push(ToastKind::Error, err.message);
            }
        }),
    }
}

/// Pager callback routing a [`PageMove`] through the slice's clamped helpers.
pub(crate) fn page_mover(dispatch: &Dispatch<AppStore>, lens: ListLens) -> Callback<PageMove> {
    let dispatch = dispatch.clone();
    Callback::from(move |intent| {
        dispatch.reduce_mut(|store| {
            let list = lens(store);
            match intent {
                PageMove::First => list.first(),
                PageMove::Previous => list.previous(),
                PageMove::Next => list.next(),
                PageMove::Last => list.last(),
            };
        });
    })
}

/// Sort callback; the slice resets to page 1 on any actual change.
pub(crate) fn sorter(
    dispatch: &Dispatch<AppStore>,
    lens: ListLens,
) -> Callback<(SortKey, SortOrder)> {
    let dispatch = dispatch.clone();
    Callback::from(move |(sort_by, order)| {
        dispatch.reduce_mut(|store| lens(store).set_sort(sort_by, order));
    })
}

/// Page-size callback; the slice resets to page 1 on any actual change.
pub(crate) fn limiter(dispatch: &Dispatch<AppStore>, lens: ListLens) -> Callback<u32> {
    let dispatch = dispatch.clone();
    Callback::from(move |limit| dispatch.reduce_mut(|store| lens(store).set_limit(limit)))
}
