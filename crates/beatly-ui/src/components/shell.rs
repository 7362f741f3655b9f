use crate::app::api::ApiCtx;
use crate::core::auth::Feature;
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::features::upload::view::UploadModal;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub children: Children,
}

/// Sidebar-plus-content layout shared by every protected screen. Nav items
/// render from the same feature table the route guard evaluates, so the menu
/// can never show a screen the guard would bounce.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let upload_open = use_state(|| false);

    let Some(session) = (*session).clone() else {
        // The guard redirects before this renders without a session; an empty
        // shell covers the brief moment between.
        return html! { <main class="content">{for props.children.iter()}</main> };
    };
    let role = session.role;

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |_| {
            if let Some(api_ctx) = &api_ctx {
                api_ctx.session.clear();
            }
            dispatch.reduce_mut(|store| store.auth.session = None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };
    let on_upload = {
        let upload_open = upload_open.clone();
        Callback::from(move |_| upload_open.set(true))
    };
    let on_upload_close = {
        let upload_open = upload_open.clone();
        Callback::from(move |()| upload_open.set(false))
    };
    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };
    let theme_label = match props.theme {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <h1 class="brand">{"Beatly"}</h1>
                <nav class="stack">
                    {Feature::Browse.allows(role).then(|| html! {
                        <Link<Route> classes="nav-item" to={Route::ConsumerHome}>{"Home"}</Link<Route>>
                    })}
                    {Feature::Manage.allows(role).then(|| html! {
                        <Link<Route> classes="nav-item" to={Route::AdminDashboard}>{"Dashboard"}</Link<Route>>
                    })}
                    {Feature::Upload.allows(role).then(|| html! {
                        <button class="nav-item ghost" onclick={on_upload}>{"Upload Video"}</button>
                    })}
                    {Feature::Analytics.allows(role).then(|| html! {
                        <Link<Route> classes="nav-item" to={Route::Analytics}>{"Analytics"}</Link<Route>>
                    })}
                </nav>
                <div class="sidebar-footer stack">
                    <span class="muted">{session.display_name.clone()}</span>
                    <button class="ghost" onclick={on_toggle_theme}>{theme_label}</button>
                    <button class="ghost" onclick={on_logout}>{"Logout"}</button>
                </div>
            </aside>
            <main class="content">{for props.children.iter()}</main>
            {if *upload_open && Feature::Upload.allows(role) {
                html! { <UploadModal on_close={on_upload_close} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
