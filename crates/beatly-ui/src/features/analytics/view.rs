//! Platform analytics screen: aggregate stat cards plus a per-video table.

use crate::app::api::ApiCtx;
use crate::app::listing;
use crate::components::list_controls::ListControls;
use crate::components::pager::Pager;
use crate::components::stat::StatCard;
use crate::core::list::ListStatus;
use crate::core::store::AppStore;
use crate::features::analytics::state::analytics_result;
use web_sys::AbortController;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const ANALYTICS_LIST: listing::ListLens = |store| &mut store.analytics.list;

#[function_component(AnalyticsPage)]
pub(crate) fn analytics_page() -> Html {
    let slice = use_selector(|store: &AppStore| store.analytics.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let reload = use_state(|| 0u32);
    let inflight = use_mut_ref(|| None as Option<AbortController>);

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
                    let seq = listing::begin(&dispatch, ANALYTICS_LIST);
                    let client = api_ctx.client.clone();
                    let session_store = api_ctx.session.clone();
                    let dispatch = dispatch.clone();
                    let query = *query;
                    yew::platform::spawn_local(async move {
                        match client.fetch_analytics(&query, controller).await {
                            Ok(response) => {
                                let (result, overall) = analytics_result(response);
                                dispatch.reduce_mut(|store| {
                                    if store.analytics.list.apply_success(seq, result) {
                                        store.analytics.overall = overall;
                                    }
                                });
                            }
                            Err(err) => listing::apply(
                                &dispatch,
                                ANALYTICS_LIST,
                                &session_store,
                                seq,
                                Err(err),
                            ),
                        }
                    });
                }
                || ()
            },
            (slice.list.query, *reload),
        );
    }

    let on_sort = listing::sorter(&dispatch, ANALYTICS_LIST);
    let on_limit = listing::limiter(&dispatch, ANALYTICS_LIST);
    let on_move = listing::page_mover(&dispatch, ANALYTICS_LIST);
    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(*reload + 1))
    };

    let list = &slice.list;
    let overall = slice.overview_cards();

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
                html! { <p class="muted centered">{"Nothing to report yet"}</p> }
            } else {
                html! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Views"}</th>
                                <th>{"Likes"}</th>
                                <th>{"Comments"}</th>
                                <th>{"Uploaded"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.into_iter().map(|row| html! {
                                <tr key={row.id.clone()}>
                                    <td>{row.title}</td>
                                    <td>{row.views.to_string()}</td>
                                    <td>{row.likes.to_string()}</td>
                                    <td>{row.comments.to_string()}</td>
                                    <td class="muted">{row.created_label}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }
        }
    };

    html! {
        <section class="page">
            <h2>{"Analytics"}</h2>
            <div class="stat-row">
                {for overall.into_iter().map(|(label, value)| html! {
                    <StatCard key={label} label={label} value={value} />
                })}
            </div>
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
