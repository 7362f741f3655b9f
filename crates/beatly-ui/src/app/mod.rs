//! App root: boot, theming, session restore, and guarded routing.
//!
//! # Design
//! - One session store and one API client per boot, shared through context.
//! - The session snapshot is seeded into the store before the first route
//!   renders, so a reload lands straight on the right screen.
//! - Every navigation passes through one guard that evaluates the route's
//!   declared role metadata; no screen re-derives authorization.

use crate::app::api::ApiCtx;
use crate::app::storage::{BrowserStorage, api_base_url, load_theme, persist_theme};
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::auth::{Access, authorize};
use crate::core::session::SessionStore;
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::features::admin::view::DashboardPage;
use crate::features::analytics::view::AnalyticsPage;
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::videos::view::{HomePage, VideoDetailPage};
use crate::routes::Route;
use gloo::utils::window;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod listing;
pub(crate) mod storage;

#[function_component(BeatlyApp)]
pub(crate) fn beatly_app() -> Html {
    let theme = use_state(load_theme);
    let api_ctx = use_memo(
        |_| {
            let session_store = SessionStore::new(Rc::new(BrowserStorage));
            // Seed the snapshot synchronously so the first guarded render
            // already sees a restored session.
            let restored = session_store.current();
            Dispatch::<AppStore>::new().reduce_mut(|store| store.auth.session = restored);
            ApiCtx::new(api_base_url(), session_store)
        },
        (),
    );

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let render = {
        let theme = *theme;
        let toggle_theme = toggle_theme;
        move |route: Route| {
            html! {
                <Guarded
                    route={route}
                    theme={theme}
                    on_toggle_theme={toggle_theme.clone()}
                />
            }
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={render} />
            </BrowserRouter>
            <ToastHost />
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
    theme: ThemeMode,
    on_toggle_theme: Callback<()>,
}

/// Route guard: evaluates the route's declared roles against the session
/// snapshot on every navigation, before any screen renders.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    match authorize((*session).as_ref(), props.route.required_roles()) {
        Access::Redirect(target) => html! { <Redirect<Route> to={target} /> },
        Access::Allow => render_screen(&props.route, props.theme, &props.on_toggle_theme),
    }
}

fn render_screen(route: &Route, theme: ThemeMode, on_toggle_theme: &Callback<()>) -> Html {
    match route {
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
        Route::ConsumerHome => in_shell(theme, on_toggle_theme, html! { <HomePage /> }),
        Route::VideoDetail { id } => in_shell(
            theme,
            on_toggle_theme,
            html! { <VideoDetailPage id={id.clone()} /> },
        ),
        Route::AdminDashboard => in_shell(theme, on_toggle_theme, html! { <DashboardPage /> }),
        Route::Analytics => in_shell(theme, on_toggle_theme, html! { <AnalyticsPage /> }),
    }
}

fn in_shell(theme: ThemeMode, on_toggle_theme: &Callback<()>, inner: Html) -> Html {
    html! {
        <AppShell theme={theme} on_toggle_theme={on_toggle_theme.clone()}>
            {inner}
        </AppShell>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BeatlyApp>::with_root(root).render();
    } else {
        yew::Renderer::<BeatlyApp>::new().render();
    }
}
