//! Consumer browsing screens: home feed and video detail.
//!
//! # Design
//! - The feed drives the shared list controller; every parameter change
//!   cancels the previous in-flight fetch and issues a new sequence id.
//! - Detail state lives in the screen; likes and comments re-read the
//!   server's authoritative response instead of predicting it.

use crate::app::api::ApiCtx;
use crate::app::listing;
use crate::components::list_controls::ListControls;
use crate::components::pager::Pager;
use crate::components::video_card::VideoCard;
use crate::core::list::ListStatus;
use crate::core::store::AppStore;
use crate::features::videos::state::{list_result, validate_comment};
use crate::models::{ToastKind, VideoDetail};
use crate::routes::Route;
use beatly_api_models::CommentCreateRequest;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const HOME_LIST: listing::ListLens = |store| &mut store.home;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let list = use_selector(|store: &AppStore| store.home.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let reload = use_state(|| 0u32);
    let inflight = use_mut_ref(|| None as Option<AbortController>);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let inflight = inflight.clone();
        use_effect_with_deps(
            move |(query, _reload)| {
                if let Some(api_ctx) = api_ctx {
                    // A superseded request is both cancelled and, should its
                    // response still arrive, discarded by the sequence guard.
                    if let Some(previous) = inflight.borrow_mut().take() {
                        previous.abort();
                    }
                    let controller = AbortController::new().ok();
                    *inflight.borrow_mut() = controller.clone();
                    let seq = listing::begin(&dispatch, HOME_LIST);
                    let client = api_ctx.client.clone();
                    let session_store = api_ctx.session.clone();
                    let dispatch = dispatch.clone();
                    let query = *query;
                    yew::platform::spawn_local(async move {
                        let outcome = client
                            .fetch_videos(&query, controller)
                            .await
                            .map(list_result);
                        listing::apply(&dispatch, HOME_LIST, &session_store, seq, outcome);
                    });
                }
                || ()
            },
            (list.query, *reload),
        );
    }

    let on_sort = listing::sorter(&dispatch, HOME_LIST);
    let on_limit = listing::limiter(&dispatch, HOME_LIST);
    let on_move = listing::page_mover(&dispatch, HOME_LIST);
    let on_select = {
        Callback::from(move |id: String| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::VideoDetail { id });
            }
        })
    };
    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(*reload + 1))
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
                html! { <p class="muted centered">{"No videos yet"}</p> }
            } else {
                html! {
                    <div class="video-grid">
                        {for rows.into_iter().map(|row| html! {
                            <VideoCard key={row.id.clone()} row={row} on_select={on_select.clone()} />
                        })}
                    </div>
                }
            }
        }
    };

    html! {
        <section class="page">
            <h2>{"Discover Videos"}</h2>
            <ListControls
                sort_by={list.query.sort_by}
                order={list.query.order}
                limit={list.query.limit}
                on_sort={on_sort}
                on_limit={on_limit}
            />
            {body}
            <Pager current={list.query.page} total={list.total_pages()} on_move={on_move} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VideoDetailProps {
    pub id: String,
}

#[function_component(VideoDetailPage)]
pub(crate) fn video_detail_page(props: &VideoDetailProps) -> Html {
    let detail = use_state(|| None as Option<VideoDetail>);
    let error = use_state(|| None as Option<String>);
    let loading = use_state(|| true);
    let draft = use_state(String::new);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let viewer_id = use_selector(|store: &AppStore| {
        store.auth.session.as_ref().map(|session| session.user_id.clone())
    });

    {
        let detail = detail.clone();
        let error = error.clone();
        let loading = loading.clone();
        let api_ctx = api_ctx.clone();
        let viewer_id = viewer_id.clone();
        use_effect_with_deps(
            move |id: &String| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let id = id.clone();
                    loading.set(true);
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match client.fetch_video_detail(&id).await {
                            Ok(response) => {
                                detail.set(Some(VideoDetail::from_response(
                                    response,
                                    (*viewer_id).as_deref(),
                                )));
                            }
                            Err(err) => error.set(Some(err.message)),
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let on_like = {
        let detail = detail.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let viewer_id = viewer_id.clone();
        let id = props.id.clone();
        Callback::from(move |_| {
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let client = api_ctx.client.clone();
            let detail = detail.clone();
            let dispatch = dispatch.clone();
            let viewer_id = viewer_id.clone();
            let id = id.clone();
            yew::platform::spawn_local(async move {
                match client.toggle_like(&id).await {
                    Ok(response) => {
                        let mut next = match (*detail).clone() {
                            Some(current) => current,
                            None => return,
                        };
                        next.apply_like(&response, (*viewer_id).as_deref());
                        let message = if next.is_liked { "Video liked" } else { "Video unliked" };
                        detail.set(Some(next));
                        dispatch.reduce_mut(|store| store.toasts.push(ToastKind::Success, message));
                    }
                    Err(err) => dispatch
                        .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message)),
                }
            });
        })
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                draft.set(area.value());
            }
        })
    };

    let on_post = {
        let detail = detail.clone();
        let draft = draft.clone();
        let dispatch = dispatch;
        let api_ctx = api_ctx;
        let viewer_id = viewer_id;
        let id = props.id.clone();
        Callback::from(move |_| {
            let Some(text) = validate_comment(&draft) else {
                dispatch
                    .reduce_mut(|store| store.toasts.push(ToastKind::Error, "Comment cannot be empty"));
                return;
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let client = api_ctx.client.clone();
            let detail = detail.clone();
            let draft = draft.clone();
            let dispatch = dispatch.clone();
            let viewer_id = viewer_id.clone();
            let id = id.clone();
            yew::platform::spawn_local(async move {
                let request = CommentCreateRequest { text, video_id: id.clone() };
                match client.add_comment(&request).await {
                    Ok(()) => {
                        draft.set(String::new());
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "Your comment has been posted");
                        });
                        // Comments are never merged locally; re-read the full detail.
                        if let Ok(response) = client.fetch_video_detail(&id).await {
                            detail.set(Some(VideoDetail::from_response(
                                response,
                                (*viewer_id).as_deref(),
                            )));
                        }
                    }
                    Err(err) => dispatch
                        .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message)),
                }
            });
        })
    };

    if *loading {
        return html! { <div class="centered"><div class="spinner" /></div> };
    }
    if let Some(message) = (*error).clone() {
        return html! {
            <div class="centered stack">
                <p class="error-text">{format!("Error: {message}")}</p>
                <Link<Route> classes="solid" to={Route::ConsumerHome}>{"Back to Home"}</Link<Route>>
            </div>
        };
    }
    let Some(video) = (*detail).clone() else {
        return html! { <p class="muted centered">{"Video not found"}</p> };
    };

    html! {
        <section class="page detail">
            <div class="detail-main">
                <video
                    class="player"
                    src={video.url.clone().unwrap_or_default()}
                    poster={video.thumbnail.clone().unwrap_or_default()}
                    controls={true}
                />
                <h2>{video.title.clone()}</h2>
                <div class="counts muted">
                    <span>{format!("{} views", video.views)}</span>
                    <span>{format!("{} comments", video.comments.len())}</span>
                    <span>{format!("{} likes", video.likes)}</span>
                </div>
                <div class="pill-row">
                    {for video.tags.iter().map(|tag| html! { <span class="pill">{tag.clone()}</span> })}
                </div>
                <p>{video.description.clone()}</p>
                <button
                    class={if video.is_liked { "solid" } else { "ghost" }}
                    onclick={on_like}
                >
                    {if video.is_liked { "Liked" } else { "Like" }}
                </button>
            </div>
            <aside class="panel comments">
                <h3>{"Comments"}</h3>
                {if video.comments.is_empty() {
                    html! { <p class="muted">{"No comments yet"}</p> }
                } else {
                    html! {
                        <ul class="stack">
                            {for video.comments.iter().map(|comment| html! {
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
                <textarea
                    rows="4"
                    placeholder="Add a comment..."
                    value={(*draft).clone()}
                    oninput={on_draft}
                />
                <button class="solid" onclick={on_post}>{"Post Comment"}</button>
            </aside>
        </section>
    }
}
