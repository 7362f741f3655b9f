//! Login and signup screens.
//!
//! # Design
//! - Validation failures stay local; only clean forms reach the API.
//! - Role handling goes through [`resolve_login`]: an unknown role surfaces
//!   as a login error and never navigates anywhere.
//! - A stored session short-circuits the login screen to its home route.

use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::features::auth::state::{LoginForm, SignupForm, resolve_login};
use crate::models::ToastKind;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let form = use_state(LoginForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();

    {
        // An existing session skips the login form entirely.
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                if let (Some(navigator), Some(session)) =
                    (navigator, dispatch.get().auth.session.clone())
                {
                    navigator.push(&Route::home_for(session.role));
                }
                || ()
            },
            (),
        );
    }

    let on_email = field_setter(&form, |form, value| form.email = value);
    let on_password = field_setter(&form, |form, value| form.password = value);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let dispatch = dispatch;
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let session_store = api_ctx.session.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.login(&request).await {
                    Ok(response) => match resolve_login(&response) {
                        Ok((session, landing)) => {
                            session_store.save(&session);
                            dispatch.reduce_mut(|store| {
                                store.auth.session = Some(session);
                            });
                            if let Some(navigator) = navigator {
                                navigator.push(&landing);
                            }
                        }
                        Err(reason) => {
                            let message = reason.message();
                            error.set(Some(message.clone()));
                            dispatch
                                .reduce_mut(|store| store.toasts.push(ToastKind::Error, message));
                        }
                    },
                    Err(err) => {
                        error.set(Some(err.message.clone()));
                        dispatch
                            .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="card auth-card">
                <h2>{"Welcome Back"}</h2>
                <label class="stack">
                    <span>{"Email"}</span>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                </label>
                {error_line(&error)}
                <button class="solid" disabled={*busy} onclick={on_submit}>
                    {if *busy { "Signing in..." } else { "Login" }}
                </button>
                <p class="muted">
                    {"New here? "}
                    <Link<Route> to={Route::Signup}>{"Sign Up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page() -> Html {
    let form = use_state(SignupForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let on_name = field_setter(&form, |form, value| form.name = value);
    let on_email = field_setter(&form, |form, value| form.email = value);
    let on_password = field_setter(&form, |form, value| form.password = value);
    let on_confirm = field_setter(&form, |form, value| form.confirm = value);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let dispatch = dispatch;
        let api_ctx = api_ctx;
        let navigator = navigator;
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.register(&request).await {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store
                                .toasts
                                .push(ToastKind::Success, "Account created, please log in");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.message.clone()));
                        dispatch
                            .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="card auth-card">
                <h2>{"Create Your Account"}</h2>
                <label class="stack">
                    <span>{"Full Name"}</span>
                    <input placeholder="Enter your full name" value={form.name.clone()} oninput={on_name} />
                </label>
                <label class="stack">
                    <span>{"Email"}</span>
                    <input type="email" placeholder="Enter your email" value={form.email.clone()} oninput={on_email} />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input type="password" placeholder="Create a strong password" value={form.password.clone()} oninput={on_password} />
                </label>
                <label class="stack">
                    <span>{"Confirm Password"}</span>
                    <input type="password" placeholder="Repeat your password" value={form.confirm.clone()} oninput={on_confirm} />
                </label>
                {error_line(&error)}
                <button class="solid" disabled={*busy} onclick={on_submit}>
                    {if *busy { "Creating..." } else { "Sign Up" }}
                </button>
                <p class="muted">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

fn error_line(error: &UseStateHandle<Option<String>>) -> Html {
    error.as_ref().map_or_else(
        || html! {},
        |message| html! { <p class="error-text">{message.clone()}</p> },
    )
}

fn field_setter<F, T>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            let mut next = (*state).clone();
            apply(&mut next, input.value());
            state.set(next);
        }
    })
}
