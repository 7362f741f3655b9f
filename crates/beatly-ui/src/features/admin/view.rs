//! Admin content-management screen.
//!
//! # Design
//! - Reuses the shared list controller over the same video collection the
//!   consumer feed reads, with its own query slice.
//! - Deletion asks for confirmation, then refreshes the current page from
//!   the server rather than patching the local list.

use crate::app::api::ApiCtx;
use crate::app::listing;
use crate::components::confirm::ConfirmDialog;
use crate::components::list_controls::ListControls;
use crate::components::pager::Pager;
use crate::components::stat::StatCard;
use crate::components::video_card::VideoCard;
use crate::core::list::ListStatus;
use crate::core::store::AppStore;
use crate::features::videos::state::list_result;
use crate::models::{ToastKind, VideoDetail};
use web_sys::AbortController;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const MANAGE_LIST: listing::ListLens = |store| &mut store.manage;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let list = use_selector(|store: &AppStore| store.manage.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let reload = use_state(|| 0u32);
    let inflight = use_mut_ref(|| None as Option<AbortController>);
    let stats = use_state(|| None as Option<VideoDetail>);
    let pending_delete = use_state(|| None as Option<String>);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let inflight = inflight.clone();
        use_effect_with_deps(
            move |(query, _reload)| {
                if let Some(api_ctx) = api_ctx {
                    if let Some(previous) = inflight.borrow_mut().take() {
                        previous.abort();
                    }
                    let controller = AbortController::new().ok();
                    *inflight.borrow_mut() = controller.clone();
                    let seq = listing::begin(&dispatch, MANAGE_LIST);
                    let client = api_ctx.client.clone();
                    let session_store = api_ctx.session.clone();
                    let dispatch = dispatch.clone();
                    let query = *query;
                    yew::platform::spawn_local(async move {
                        let outcome = client
                            .fetch_videos(&query, controller)
                            .await
                            .map(list_result);
                        listing::apply(&dispatch, MANAGE_LIST, &session_store, seq, outcome);
                    });
                }
                || ()
            },
            (list.query, *reload),
        );
    }

    let on_sort = listing::sorter(&dispatch, MANAGE_LIST);
    let on_limit = listing::limiter(&dispatch, MANAGE_LIST);
    let on_move = listing::page_mover(&dispatch, MANAGE_LIST);
    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_retry = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    // Per-video stats modal, served by the dedicated stats projection.
    let on_select = {
        let stats = stats.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |id: String| {
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let client = api_ctx.client.clone();
            let stats = stats.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                match client.fetch_video_stats(&id).await {
                    Ok(response) => stats.set(Some(VideoDetail::from_response(response, None))),
                    Err(err) => dispatch
                        .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message)),
                }
            });
        })
    };
    let on_stats_close = {
        let stats = stats.clone();
        Callback::from(move |_| stats.set(None))
    };

    let on_delete_request = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |id: String| pending_delete.set(Some(id)))
    };
    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };
    let on_delete_confirm = {
        let pending_delete = pending_delete.clone();
        let dispatch = dispatch;
        let api_ctx = api_ctx;
        let refresh = refresh;
        Callback::from(move |()| {
            let Some(id) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let refresh = refresh.clone();
            yew::platform::spawn_local(async move {
                match client.delete_video(&id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            store
                                .toasts
                                .push(ToastKind::Success, "The video has been deleted");
                        });
                        refresh.emit(());
                    }
                    Err(err) => dispatch
                        .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message)),
                }
            });
        })
    };

    let body = match list.status {
        ListStatus::Idle | ListStatus::Loading => html! {
            <div class="centered"><div class="spinner" /></div>
        },
        ListStatus::Failed => html! {
            <div class="centered stack">
                <p class="error-text">
                    {format!("Error: {}", list.error.clone().unwrap_or_default())}
                </p>
                <button class="solid" onclick={on_retry}>{"Retry"}</button>
            </div>
        },
        ListStatus::Ready => {
            let rows = list.result.as_ref().map(|result| result.items.clone()).unwrap_or_default();
            if rows.is_empty() {
                html! { <p class="muted centered">{"No videos uploaded yet"}</p> }
            } else {
                html! {
                    <div class="video-grid">
                        {for rows.into_iter().map(|row| html! {
                            <VideoCard
                                key={row.id.clone()}
                                row={row}
                                on_select={on_select.clone()}
                                on_delete={Some(on_delete_request.clone())}
                            />
                        })}
                    </div>
                }
            }
        }
    };

    html! {
        <section class="page">
            <h2>{"Video Management"}</h2>
            <p class="muted">{"Manage and monitor your platform content"}</p>
            <ListControls
                sort_by={list.query.sort_by}
                order={list.query.order}
                limit={list.query.limit}
                on_sort={on_sort}
                on_limit={on_limit}
            />
            {body}
            <Pager current={list.query.page} total={list.total_pages()} on_move={on_move} />
            {stats_modal(&stats, &on_stats_close)}
            <ConfirmDialog
                open={pending_delete.is_some()}
                title="Delete Video"
                body="Are you sure you want to delete this video? This action cannot be undone."
                confirm_label="Delete"
                on_confirm={on_delete_confirm}
                on_cancel={on_delete_cancel}
            />
        </section>
    }
}

fn stats_modal(stats: &UseStateHandle<Option<VideoDetail>>, on_close: &Callback<MouseEvent>) -> Html {
    let Some(detail) = stats.as_ref() else {
        return html! {};
    };
    html! {
        <div class="overlay" role="dialog" aria-modal="true">
            <div class="card dialog stats">
                <header>
                    <h3>{"Video Statistics"}</h3>
                    <button class="ghost" aria-label="Close" onclick={on_close.clone()}>{"✕"}</button>
                </header>
                <div class="stack">
                    <h4>{detail.title.clone()}</h4>
                    <p class="muted">{detail.description.clone()}</p>
                    {detail.uploader.as_ref().map_or_else(
                        || html! {},
                        |name| html! { <p class="muted">{format!("Uploaded by {name}")}</p> },
                    )}
                    <p class="muted">{format!("Uploaded on {}", detail.created_label)}</p>
                </div>
                <div class="stat-row">
                    <StatCard label="Views" value={detail.views.to_string()} />
                    <StatCard label="Likes" value={detail.likes.to_string()} />
                    <StatCard label="Comments" value={detail.comments.len().to_string()} />
                </div>
                <h4>{"Recent Comments"}</h4>
                {if detail.comments.is_empty() {
                    html! { <p class="muted">{"No comments yet"}</p> }
                } else {
                    html! {
                        <ul class="stack">
                            {for detail.comments.iter().map(|comment| html! {
                                <li class="card" key={comment.id.clone()}>
                                    <div class="comment-head">
                                        <strong>{comment.author.clone()}</strong>
                                        <span class="muted">{comment.created_label.clone()}</span>
                                    </div>
                                    <p>{comment.text.clone()}</p>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </div>
        </div>
    }
}
